use std::io;
use std::path::PathBuf;

use configgen::error::Error;
use minijinja::ErrorKind;
use std::error::Error as _;

#[test]
fn test_error_display() {
    let err = Error::TemplateNotFound {
        template: "front.json".to_string(),
        template_root: PathBuf::from("configs"),
    };
    assert_eq!(err.to_string(), "Template 'front.json' was not found in 'configs'.");

    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = Error::InvalidOutput { template: "front.json".to_string(), source };
    assert!(err.to_string().starts_with("Template 'front.json' produced invalid JSON: "));

    let err = Error::OutputWriteError {
        path: PathBuf::from("out/front.json"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write 'out/front.json': denied.");
}

#[test]
fn test_undefined_value_keeps_engine_error() {
    let err = Error::UndefinedValue {
        template: "front.json".to_string(),
        source: minijinja::Error::new(ErrorKind::UndefinedError, "clusters is undefined"),
    };

    assert!(err
        .to_string()
        .starts_with("Template 'front.json' references an undefined value: "));
    assert!(err.to_string().contains("clusters is undefined"));

    let source = err.source().unwrap().downcast_ref::<minijinja::Error>().unwrap();
    assert_eq!(source.kind(), ErrorKind::UndefinedError);
}
