use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn path_only_uses_defaults() {
    assert_eq!(
        parse_dump_options(&args(&["Main.jack"])),
        Ok((DumpOptions::default(), "Main.jack".to_string()))
    );
    assert_eq!(DumpOptions::default().format, OutputFormat::Tree);
    assert!(!DumpOptions::default().show_spans);
}

#[test]
fn flags_before_or_after_path() {
    let expected = DumpOptions {
        format: OutputFormat::Json,
        show_spans: true,
    };
    assert_eq!(
        parse_dump_options(&args(&["--json", "Main.jack", "--spans"])),
        Ok((expected, "Main.jack".to_string()))
    );
    assert_eq!(
        parse_dump_options(&args(&["--spans", "--json", "Main.jack"])),
        Ok((expected, "Main.jack".to_string()))
    );
}

#[test]
fn last_format_flag_wins() {
    let (options, _) = parse_dump_options(&args(&["--json", "--tree", "a.jack"])).unwrap();
    assert_eq!(options.format, OutputFormat::Tree);
}

#[test]
fn errors() {
    assert_eq!(parse_dump_options(&[]), Err(OptionsError::MissingPath));
    assert_eq!(
        parse_dump_options(&args(&["--spans"])),
        Err(OptionsError::MissingPath)
    );
    assert_eq!(
        parse_dump_options(&args(&["--yaml", "a.jack"])),
        Err(OptionsError::UnknownOption("--yaml".into()))
    );
    assert_eq!(
        parse_dump_options(&args(&["a.jack", "b.jack"])),
        Err(OptionsError::ExtraArgument("b.jack".into()))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        OptionsError::UnknownOption("--yaml".into()).to_string(),
        "unknown option '--yaml'"
    );
    assert_eq!(OptionsError::MissingPath.to_string(), "missing file path");
}
