use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN_STRINGS: &str = r#"/* Greetings */
"hello" = "Hi";
"bye" = "Bye"; // farewell
"#;

#[test]
fn test_matching_languages() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file(
        "vi.lproj/Localizable.strings",
        r#""bye" = "Tạm biệt";
"hello" = "Xin chào";
"#,
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--resources", "Localizable.strings"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localizable.strings matches for ./vi.lproj/Localizable.strings

    ✓ Checked 2 files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_and_extra_keys() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file(
        "vi.lproj/Localizable.strings",
        r#""hello" = "Xin chào";
"extra_key" = "X";
"#,
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--resources", "Localizable.strings"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Localizable.strings issues in ./vi.lproj/Localizable.strings
       Missing keys: bye
       Extra keys: extra_key

    ✘ 1 problem across 1 resource

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_base_duplicates_reported_first() -> Result<()> {
    let test = CliTest::with_file(
        "en.lproj/Localizable.strings",
        "\"x\" = \"1\";\n\"x\" = \"2\";\n",
    )?;
    test.write_file("vi.lproj/Localizable.strings", "\"x\" = \"1\";\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--resources", "Localizable.strings"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Localizable.strings issues in ./en.lproj/Localizable.strings
       Duplicate keys: x
    ✓ Localizable.strings matches for ./vi.lproj/Localizable.strings

    ✘ 1 problem across 1 resource

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_target_file() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;

    let mut cmd = test.check_command();
    cmd.args(["--resources", "Localizable.strings"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Localizable.strings issues in ./vi.lproj/Localizable.strings
       Missing keys: <file missing>, bye, hello

    ✘ 1 problem across 1 resource

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_base_resource_is_skipped() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file("vi.lproj/Localizable.strings", EN_STRINGS)?;

    // Default resources include InfoPlist.strings, which has no base file here.
    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Localizable.strings matches for ./vi.lproj/Localizable.strings
    warning: base resource missing: ./en.lproj/InfoPlist.strings

    ✘ 1 problem across 2 resources

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_unreadable_target_exits_with_error() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file("vi.lproj/Localizable.strings", "")?;
    // Not valid UTF-8
    std::fs::write(
        test.root().join("vi.lproj/Localizable.strings"),
        [0xff, 0xfe, 0xfd],
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--resources", "Localizable.strings"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----
    error: Localizable.strings: failed to read ./vi.lproj/Localizable.strings: stream did not contain valid UTF-8

    ✘ 1 problem across 1 resource

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file("vi.lproj/Localizable.strings", r#""hello" = "Xin chào";"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--resources", "Localizable.strings", "--format", "json"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    {
      "resources": [
        {
          "resource": "Localizable.strings",
          "status": "checked",
          "base_path": "./en.lproj/Localizable.strings",
          "base_status": "clean",
          "reports": [
            {
              "path": "./vi.lproj/Localizable.strings",
              "missing": [
                "bye"
              ],
              "extra": [],
              "duplicates": []
            }
          ]
        }
      ]
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lprojparityrc.json",
        r#"{
            "root": "App",
            "languages": ["ja", "vi"],
            "resources": ["Localizable.strings"]
        }"#,
    )?;
    test.write_file("App/en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file("App/ja.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file("App/vi.lproj/Localizable.strings", EN_STRINGS)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localizable.strings matches for App/ja.lproj/Localizable.strings
    ✓ Localizable.strings matches for App/vi.lproj/Localizable.strings

    ✓ Checked 3 files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lprojparityrc.json",
        r#"{
            "root": "App",
            "languages": ["ja"],
            "resources": ["Main.strings"]
        }"#,
    )?;
    test.write_file("App/en.lproj/Main.strings", EN_STRINGS)?;
    test.write_file("App/ja.lproj/Main.strings", EN_STRINGS)?;
    test.write_file("App/Sources/AppDelegate.swift", "")?;

    let mut cmd = test.check_command();
    cmd.current_dir(test.root().join("App/Sources"));
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Main.strings matches for [ROOT]/App/ja.lproj/Main.strings

        ✓ Checked 2 files - no issues found

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_discover_languages_and_resources() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Main.strings", EN_STRINGS)?;
    test.write_file("fr.lproj/Main.strings", EN_STRINGS)?;
    test.write_file("de.lproj/Main.strings", r#""hello" = "Hallo";"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--languages", "--resources"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Main.strings issues in ./de.lproj/Main.strings
       Missing keys: bye
    ✓ Main.strings matches for ./fr.lproj/Main.strings

    ✘ 1 problem across 1 resource

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_verbose_notes_on_stderr() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file("vi.lproj/Localizable.strings", EN_STRINGS)?;

    let mut cmd = test.check_command();
    cmd.args(["--resources", "Localizable.strings", "-v"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localizable.strings matches for ./vi.lproj/Localizable.strings

    ✓ Checked 2 files - no issues found

    ----- stderr -----
    note: No .lprojparityrc.json found, using default configuration
    note: Checking 1 resource(s) in . against base 'en' for: vi
    note: Comparing ./vi.lproj/Localizable.strings with ./en.lproj/Localizable.strings
    ");

    Ok(())
}

#[test]
fn test_base_override_drops_it_from_targets() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file("vi.lproj/Localizable.strings", EN_STRINGS)?;

    // The default target languages are ["vi"].
    let mut cmd = test.check_command();
    cmd.args(["--base", "vi", "--resources", "Localizable.strings"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ✓ Checked 1 file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_base_listed_with_targets_is_skipped() -> Result<()> {
    let test = CliTest::with_file("en.lproj/Localizable.strings", EN_STRINGS)?;
    test.write_file("ja.lproj/Localizable.strings", r#""hello" = "こんにちは";"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--languages", "en,ja"]);
    cmd.args(["--resources", "Localizable.strings"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Localizable.strings issues in ./ja.lproj/Localizable.strings
       Missing keys: bye

    ✘ 1 problem across 1 resource

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_repeated_language_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.check_command();
    cmd.args(["--languages", "vi,vi"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid command line arguments: Invalid value in 'languages': "vi" is listed twice
    "#);

    Ok(())
}

#[test]
fn test_help_without_command() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("check"));

    Ok(())
}
