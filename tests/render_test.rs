//! Tests for the pipeline renderer
//!
//! Covers the rendering contract: exactly one setup block per template,
//! deterministic output, step ordering, empty run blocks, and the deploy
//! guard.

use rstest::rstest;

use devopsctl::domain::{catalog, render, Language, PipelineTemplate};

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[rstest]
#[case("node", "javascript", "actions/setup-node@v3")]
#[case("go", "go", "actions/setup-go@v3")]
#[case("python", "python", "actions/setup-python@v3")]
fn given_builtin_template_when_rendered_then_contains_exactly_one_setup_block(
    #[case] key: &str,
    #[case] language_tag: &str,
    #[case] setup_action: &str,
) {
    // Arrange
    let template = catalog::lookup(key).unwrap();

    // Act
    let yaml = render(&template);

    // Assert: one setup step, for this language only
    assert_eq!(
        count_occurrences(&yaml, "- name: Setup "),
        1,
        "exactly one setup step expected"
    );
    assert!(yaml.contains(&format!("- name: Setup {}", language_tag)));
    assert_eq!(count_occurrences(&yaml, "uses: actions/setup-"), 1);
    assert!(yaml.contains(setup_action));
}

#[test]
fn given_identical_templates_when_rendered_twice_then_output_is_byte_identical() {
    // Arrange
    let template = catalog::lookup("python").unwrap();

    // Act
    let first = render(&template);
    let second = render(&template);

    // Assert
    assert_eq!(first, second);
}

#[test]
fn given_n_build_steps_when_rendered_then_build_block_has_n_lines_in_order() {
    // Arrange
    let template = PipelineTemplate::new(
        "Ordered",
        Language::Go,
        &["step one", "step two", "step three"],
        &["only test"],
        &["only deploy"],
    );

    // Act
    let yaml = render(&template);

    // Assert: all build lines present, in declaration order
    let build_block = yaml
        .split("- name: Build")
        .nth(1)
        .and_then(|rest| rest.split("- name: Test").next())
        .unwrap();
    let step_lines: Vec<&str> = build_block
        .lines()
        .filter(|l| l.starts_with("        "))
        .map(|l| l.trim())
        .collect();
    assert_eq!(step_lines, vec!["step one", "step two", "step three"]);
}

#[test]
fn given_empty_step_lists_when_rendered_then_run_blocks_are_empty() {
    // Arrange
    let template = PipelineTemplate::new("Bare", Language::Python, &[], &[], &[]);

    // Act
    let yaml = render(&template);

    // Assert: each run block is a bare literal marker with no command lines
    assert_eq!(count_occurrences(&yaml, "run: |"), 3);
    assert!(yaml.contains(
        "    - name: Build\n      run: |\n\n    - name: Test\n      run: |\n\n    - name: Deploy"
    ));
    assert!(yaml.ends_with("      run: |\n"));
}

#[test]
fn given_any_template_when_rendered_then_deploy_is_guarded_to_main() {
    for (_, template) in catalog::all() {
        let yaml = render(&template);
        assert!(
            yaml.contains("    - name: Deploy\n      if: github.ref == 'refs/heads/main'"),
            "deploy guard missing for {}",
            template.name
        );
    }
}

#[test]
fn given_unspecified_language_when_rendered_then_setup_body_is_empty() {
    // Arrange
    let template = PipelineTemplate::new("Mystery", Language::Unspecified, &["make"], &[], &[]);

    // Act
    let yaml = render(&template);

    // Assert: name-only setup step, no setup action at all
    assert!(yaml.contains("- name: Setup unspecified\n\n    - name: Build"));
    assert_eq!(count_occurrences(&yaml, "uses: actions/setup-"), 0);
}

#[test]
fn given_template_when_rendered_then_skeleton_has_fixed_triggers() {
    // Arrange
    let template = catalog::lookup("node").unwrap();

    // Act
    let yaml = render(&template);

    // Assert
    assert!(yaml.starts_with("name: Node.js CI/CD\n"));
    assert!(yaml.contains("  push:\n    branches: [ main, develop ]"));
    assert!(yaml.contains("  pull_request:\n    branches: [ main ]"));
    assert!(yaml.contains("  build-and-test:\n    runs-on: ubuntu-latest"));
    assert!(yaml.contains("- uses: actions/checkout@v3"));
}
