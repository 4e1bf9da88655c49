use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const APP_VUE: &str = r#"<template>
  <div class="app">
    <h1>Welcome</h1>
    <p>Hello {{ name }}</p>
  </div>
</template>

<script>
export default { props: ["name"], data: () => ({ title: "Not scanned" }) }
</script>
"#;

const APP_VUE_REWRITTEN: &str = r#"<template>
  <div class="app">
    <h1>{{ $t('app.welcome') }}</h1>
    <p>{{ $t('app.hello') }} {{ name }}</p>
  </div>
</template>

<script>
export default { props: ["name"], data: () => ({ title: "Not scanned" }) }
</script>
"#;

fn write_command(test: &CliTest) -> std::process::Command {
    let mut cmd = test.scan_command("src");
    cmd.args(["--replace", "--write"]);
    cmd
}

#[test]
fn test_discovery_lists_text_and_fails() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;

    assert_cmd_snapshot!(test.scan_command("src"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    Encountered un-localized text!
    src/App.vue:3  "Welcome"
    src/App.vue:4  "Hello"

    ✘ Found 2 un-localized texts in 1 file.
    Run with --replace to preview replacements.

    ----- stderr -----
    "#);

    assert_eq!(test.read_file("src/App.vue")?, APP_VUE);
    Ok(())
}

#[test]
fn test_no_findings_exits_zero() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        "<template>\n  <p>{{ $t('app.hello') }}</p>\n</template>\n",
    )?;

    assert_cmd_snapshot!(test.scan_command("src"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No un-localized text found (1 file checked).

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_empty_tree_leaves_catalog_untouched() -> Result<()> {
    let test = CliTest::with_file("src/readme.md", "# Nothing to see")?;

    assert_cmd_snapshot!(write_command(&test), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No un-localized text found (0 files checked).

    ----- stderr -----
    ");

    assert!(!test.exists("en.json"));
    Ok(())
}

#[test]
fn test_dry_run_changes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;

    let mut cmd = test.scan_command("src");
    cmd.arg("--replace");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    === DRY RUN ===
    --> src/App.vue:3
      - Welcome
      + {{ $t('app.welcome') }}

    --> src/App.vue:4
      - Hello
      + {{ $t('app.hello') }}

    ---
    Summary:
      2 replacements across 1 file
      2 new keys for en.json (0 already present)

    Run with --write to apply changes.

    ----- stderr -----
    ");

    assert_eq!(test.read_file("src/App.vue")?, APP_VUE);
    assert!(!test.exists("en.json"));
    Ok(())
}

#[test]
fn test_write_rewrites_files_and_catalog() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;

    assert_cmd_snapshot!(write_command(&test), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated: src/App.vue (2 replacements)

    Locale file created: en.json (2 keys, 2 added)
    ✓ Done!

    ----- stderr -----
    ");

    assert_eq!(test.read_file("src/App.vue")?, APP_VUE_REWRITTEN);
    assert_eq!(
        test.read_file("en.json")?,
        "{\n  \"app.hello\": \"Hello\",\n  \"app.welcome\": \"Welcome\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_second_run_finds_nothing() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;

    let status = write_command(&test).output()?.status;
    assert_eq!(status.code(), Some(0));
    let catalog = test.read_file("en.json")?;

    assert_cmd_snapshot!(write_command(&test), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No un-localized text found (1 file checked).

    ----- stderr -----
    ");

    assert_eq!(test.read_file("src/App.vue")?, APP_VUE_REWRITTEN);
    assert_eq!(test.read_file("en.json")?, catalog);
    Ok(())
}

#[test]
fn test_existing_catalog_values_are_kept() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;
    test.write_file(
        "en.json",
        r#"{"app.welcome": "Welcome aboard!", "zzz.other": "Other"}"#,
    )?;

    let mut cmd = test.scan_command("src");
    cmd.arg("--replace");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    === DRY RUN ===
    --> src/App.vue:3
      - Welcome
      + {{ $t('app.welcome') }}

    --> src/App.vue:4
      - Hello
      + {{ $t('app.hello') }}

    ---
    Summary:
      2 replacements across 1 file
      1 new key for en.json (1 already present)

    Run with --write to apply changes.

    ----- stderr -----
    ");

    assert_cmd_snapshot!(write_command(&test), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated: src/App.vue (2 replacements)

    Locale file updated: en.json (3 keys, 1 added)
      - kept 1 existing value unchanged
    ✓ Done!

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("en.json")?,
        "{\n  \"app.hello\": \"Hello\",\n  \"app.welcome\": \"Welcome aboard!\",\n  \"zzz.other\": \"Other\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_malformed_catalog_aborts_before_rewrite() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;
    test.write_file("en.json", "{ this is not json")?;

    assert_cmd_snapshot!(write_command(&test), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: failed to parse existing locale file en.json: key must be a string at line 1 column 3
    ");

    assert_eq!(test.read_file("src/App.vue")?, APP_VUE);
    assert_eq!(test.read_file("en.json")?, "{ this is not json");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_catalog_write_failure_exits_with_error() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;
    // A dangling link reads as "no catalog yet" but cannot be created as a directory.
    std::os::unix::fs::symlink("nowhere", test.root().join("locales"))?;

    let mut cmd = write_command(&test);
    cmd.args(["--output", "locales/en.json"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----
    Updated: src/App.vue (2 replacements)

    ----- stderr -----
    Error: failed to write locale file locales/en.json: File exists (os error 17)
    ");

    assert_eq!(test.read_file("src/App.vue")?, APP_VUE_REWRITTEN);
    assert!(!test.exists("nowhere"));
    Ok(())
}

#[test]
fn test_duplicate_text_gets_suffixed_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/components/Button.vue",
        "<template><button>Save</button><button>Save</button></template>",
    )?;
    test.write_file(
        "src/pages/Edit.vue",
        "<template><button>Save</button></template>",
    )?;

    let mut cmd = write_command(&test);
    cmd.args(["--output", "locales/en.json"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated: src/components/Button.vue (2 replacements)
    Updated: src/pages/Edit.vue (1 replacement)

    Locale file created: locales/en.json (3 keys, 3 added)
    ✓ Done!

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("src/components/Button.vue")?,
        "<template><button>{{ $t('components.button.save') }}</button><button>{{ $t('components.button.save-2') }}</button></template>"
    );
    assert_eq!(
        test.read_file("locales/en.json")?,
        "{\n  \"components.button.save\": \"Save\",\n  \"components.button.save-2\": \"Save\",\n  \"pages.edit.save\": \"Save\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_config_file_settings() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        "<template><p>A very long sentence that keeps going</p><span>...</span></template>",
    )?;
    test.write_file(
        ".localizerc.json",
        r#"{ "output": "i18n/en.json", "maxSlug": 12, "skipSymbolOnly": true }"#,
    )?;

    assert_cmd_snapshot!(write_command(&test), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated: src/App.vue (1 replacement)

    Locale file created: i18n/en.json (1 key, 1 added)
    ✓ Done!

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("i18n/en.json")?,
        "{\n  \"app.a-very-long\": \"A very long sentence that keeps going\"\n}\n"
    );
    assert!(test.read_file("src/App.vue")?.contains("<span>...</span>"));
    Ok(())
}

#[test]
fn test_cli_flags_override_config() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", "<template><p>Hello world</p></template>")?;
    test.write_file(".localizerc.json", r#"{ "maxSlug": 3 }"#)?;

    let mut cmd = test.scan_command("src");
    cmd.args(["--replace", "--max-slug", "30"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    === DRY RUN ===
    --> src/App.vue:1
      - Hello world
      + {{ $t('app.hello-world') }}

    ---
    Summary:
      1 replacement across 1 file
      1 new key for en.json (0 already present)

    Run with --write to apply changes.

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_explicit_config_flag() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", "<template><p>Hi</p></template>")?;
    test.write_file("conf/localize.json", r#"{ "output": "out.json" }"#)?;

    let mut cmd = write_command(&test);
    cmd.args(["--config", "conf/localize.json"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated: src/App.vue (1 replacement)

    Locale file created: conf/out.json (1 key, 1 added)
    ✓ Done!

    ----- stderr -----
    ");

    assert!(test.root().join("conf/out.json").exists());
    Ok(())
}

#[test]
fn test_empty_slug_is_flagged() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", "<template><p>***</p></template>")?;

    assert_cmd_snapshot!(test.scan_command("src"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    Encountered un-localized text!
    src/App.vue:1  "***"

    ✘ Found 1 un-localized text in 1 file.
    Run with --replace to preview replacements.

    ----- stderr -----
    warning: "***" at src/App.vue:1 has no ASCII letters or digits for a key slug; using "app."
    "#);
    Ok(())
}

#[test]
fn test_target_must_be_directory() -> Result<()> {
    let test = CliTest::with_file("App.vue", "<template><p>Hi</p></template>")?;

    assert_cmd_snapshot!(test.scan_command("App.vue"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: App.vue: path must be a directory
    ");

    assert_cmd_snapshot!(test.scan_command("missing"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: missing: No such file or directory (os error 2)
    ");
    Ok(())
}

#[test]
fn test_write_without_replace_is_rejected() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;

    let mut cmd = test.scan_command("src");
    cmd.arg("--write");
    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file("src/App.vue")?, APP_VUE);
    Ok(())
}
