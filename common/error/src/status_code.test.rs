use super::*;
use strum::IntoEnumIterator;

#[test]
fn test_status_code_values() {
    assert_eq!(StatusCode::Success as i32, 00_000);
    assert_eq!(StatusCode::Unknown as i32, 01_000);
    assert_eq!(StatusCode::InvalidArguments as i32, 02_000);
    assert_eq!(StatusCode::IoError as i32, 03_000);
    assert_eq!(StatusCode::InvalidConfig as i32, 10_000);
}

#[test]
fn test_is_success() {
    assert!(StatusCode::is_success(0));
    assert!(!StatusCode::is_success(01_000));
}

#[test]
fn test_is_retryable() {
    assert!(StatusCode::Internal.is_retryable());
    assert!(!StatusCode::InvalidArguments.is_retryable());
    assert!(!StatusCode::FileNotFound.is_retryable());
}

#[test]
fn test_should_log_error() {
    assert!(StatusCode::Unknown.should_log_error());
    assert!(StatusCode::Internal.should_log_error());
    assert!(!StatusCode::InvalidArguments.should_log_error());
    assert!(!StatusCode::IoError.should_log_error());
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", StatusCode::Success), "Success");
    assert_eq!(format!("{}", StatusCode::IoError), "IoError");
}

#[test]
fn test_name() {
    assert_eq!(StatusCode::Success.name(), "Success");
    assert_eq!(StatusCode::FileNotFound.name(), "FileNotFound");
    assert_eq!(StatusCode::InvalidArguments.name(), "InvalidArguments");
}

#[test]
fn test_from_i32() {
    assert_eq!(StatusCode::from_i32(03_001), Some(StatusCode::FileNotFound));
    assert_eq!(StatusCode::from_i32(99_999), None);
}

#[test]
fn test_metadata_consistency() {
    for code in StatusCode::iter() {
        let meta = code.meta();
        let value = code as i32;

        // Verify category matches code range (XX_YYY format)
        match meta.category {
            StatusCategory::Success => assert_eq!(value, 0),
            StatusCategory::Common => assert!((01_000..02_000).contains(&value)),
            StatusCategory::Input => assert!((02_000..03_000).contains(&value)),
            StatusCategory::IO => assert!((03_000..04_000).contains(&value)),
            StatusCategory::Config => assert!((10_000..11_000).contains(&value)),
        }
    }
}
