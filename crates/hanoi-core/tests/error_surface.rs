use hanoi_core::errors::{ErrorInfo, HanoiError};
use hanoi_core::{EncodingBase, HanoiParams};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("disks", 3)
        .with_context("positions", "3")
}

#[test]
fn codec_error_surface() {
    let err = HanoiError::Codec(sample_info("id-out-of-range", "state id exceeds B^N"));
    assert_eq!(err.code(), "id-out-of-range");
    assert!(err.info().context.contains_key("disks"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = HanoiError::Engine(
        sample_info("frontier-limit", "frontier grew too large").with_hint("raise max_frontier"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("engine error: frontier grew too large"));
    assert!(rendered.contains("disks=3"));
    assert!(rendered.contains("hint: raise max_frontier"));
}

#[test]
fn invalid_parameters_report_config_family() {
    let err = HanoiParams::new(4, 6, EncodingBase::Disks).unwrap_err();
    match err {
        HanoiError::Config(info) => {
            assert_eq!(info.code, "base-too-small");
            assert_eq!(info.context.get("base"), Some(&"4".to_string()));
            assert!(info.hint.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
