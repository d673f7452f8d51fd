use crate::response;

#[test]
fn test_help_lists_commands() {
    let help = response::help();

    assert!(help.contains("/help"));
    assert!(help.contains("/start"));
    assert!(help.contains("/resumen"));
}

#[test]
fn test_pipeline_error_includes_message() {
    let reply = response::pipeline_error("API error: overloaded");

    assert!(reply.starts_with("❌"));
    assert!(reply.contains("API error: overloaded"));
}
