use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn deck_dir(decks: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let slides = dir.path().join("slides");
    fs::create_dir(&slides).expect("Failed to create slides dir");

    for (name, content) in decks {
        fs::write(slides.join(format!("{}.md", name)), content)
            .expect("Failed to write slide deck");
    }

    dir
}

#[test]
fn test_cli_renders_selected_deck() -> Result<(), Box<dyn std::error::Error>> {
    let dir = deck_dir(&[("category-theory", "# Functors\n")]);
    let mut cmd = Command::cargo_bin("mdeck")?;

    let assert = cmd
        .arg("?slide=category-theory")
        .arg("-L")
        .arg(dir.path())
        .assert();
    assert.success().code(0).stdout(
        "<div class=\"slideshow\">\n<section class=\"slide\">\n<h1>Functors</h1>\n</section>\n</div>\n",
    );

    Ok(())
}

#[test]
fn test_cli_falls_back_to_default_deck_without_slide_key() -> Result<(), Box<dyn std::error::Error>>
{
    let dir = deck_dir(&[("monoids", "# Monoids\n")]);
    let mut cmd = Command::cargo_bin("mdeck")?;

    let assert = cmd.arg("?foo=bar").arg("-L").arg(dir.path()).assert();
    assert
        .success()
        .stdout(predicate::str::contains("<h1>Monoids</h1>"));

    Ok(())
}

#[test]
fn test_cli_falls_back_to_default_deck_without_query() -> Result<(), Box<dyn std::error::Error>> {
    let dir = deck_dir(&[("monoids", "# Monoids\n")]);
    let mut cmd = Command::cargo_bin("mdeck")?;

    let assert = cmd.arg("-L").arg(dir.path()).assert();
    assert
        .success()
        .stdout(predicate::str::contains("<h1>Monoids</h1>"));

    Ok(())
}

#[test]
fn test_cli_falls_back_to_default_deck_on_empty_value() -> Result<(), Box<dyn std::error::Error>> {
    let dir = deck_dir(&[("monoids", "# Monoids\n")]);
    let mut cmd = Command::cargo_bin("mdeck")?;

    let assert = cmd.arg("?slide=").arg("-L").arg(dir.path()).assert();
    assert
        .success()
        .stdout(predicate::str::contains("<h1>Monoids</h1>"));

    Ok(())
}

#[test]
fn test_cli_decodes_percent_encoded_deck_name() -> Result<(), Box<dyn std::error::Error>> {
    let dir = deck_dir(&[("100%", "# Percent\n")]);
    let mut cmd = Command::cargo_bin("mdeck")?;

    let assert = cmd.arg("?slide=100%25").arg("-L").arg(dir.path()).assert();
    assert
        .success()
        .stdout(predicate::str::contains("<h1>Percent</h1>"));

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_deck() -> Result<(), Box<dyn std::error::Error>> {
    let dir = deck_dir(&[]);
    let mut cmd = Command::cargo_bin("mdeck")?;

    let assert = cmd.arg("?slide=nope").arg("-L").arg(dir.path()).assert();
    assert
        .failure()
        .stderr(predicate::str::contains("slides/nope.md"));

    Ok(())
}

#[test]
fn test_cli_writes_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = deck_dir(&[("monoids", "# Monoids\n")]);
    let out = dir.path().join("deck.html");
    let mut cmd = Command::cargo_bin("mdeck")?;

    let assert = cmd
        .arg("-L")
        .arg(dir.path())
        .arg("-o")
        .arg(&out)
        .assert();
    assert.success().stdout("");

    let html = fs::read_to_string(&out)?;
    assert!(html.contains("<h1>Monoids</h1>"));

    Ok(())
}
