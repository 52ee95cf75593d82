//! Inspection and fixes over parsed sources.

use redundoc_check::{
    DeleteFix, Inspector, Problem, ProblemKind, ProblemTarget, Settings, apply_edits,
};
use redundoc_ingest::parse_source;
use redundoc_model::SourceFile;

const CUSTOMER: &str = "\
package shop;

/**
 * Customer.
 */
public class Customer {
    /**
     * The postnummer.
     */
    private String postnummer;

    /**
     * Formats the address for printed labels.
     *
     * @param locale the locale
     * @param width maximum characters per line
     * @return the
     */
    public String formatAddress(Locale locale, int width) {
        return \"\";
    }

    /**
     * @param id the customer id
     */
    public Customer(long id) {}
}
";

fn inspect(settings: &Settings) -> (SourceFile, Vec<Problem>) {
    let source = parse_source("Customer.java", CUSTOMER);
    let problems = Inspector::new(settings).inspect(&source);
    (source, problems)
}

fn summary(problems: &[Problem]) -> Vec<(usize, ProblemKind)> {
    problems.iter().map(|p| (p.span.line, p.kind)).collect()
}

#[test]
fn test_reports_restating_comments_and_tags() {
    let (_, problems) = inspect(&Settings::default());
    assert_eq!(
        summary(&problems),
        vec![
            (3, ProblemKind::CommentMatchesName),
            (7, ProblemKind::CommentMatchesName),
            (15, ProblemKind::ParamMatchesParamName),
            (17, ProblemKind::MissingReturnDescription),
            (23, ProblemKind::CommentMatchesName),
        ]
    );
    assert_eq!(problems[2].target, ProblemTarget::Tag(0));
    assert_eq!(
        problems[1].similarity.as_ref().map(|s| s.ratio()),
        Some(1.0)
    );
}

#[test]
fn test_body_only_comparison_reaches_the_tags() {
    let settings = Settings {
        compare_with_tags: false,
        ..Settings::default()
    };
    let (_, problems) = inspect(&settings);
    let constructor: Vec<ProblemKind> = problems
        .iter()
        .filter(|p| p.span.line >= 23)
        .map(|p| p.kind)
        .collect();
    assert_eq!(constructor, vec![ProblemKind::ParamMatchesOwnerName]);
}

#[test]
fn test_fixing_a_tag_keeps_the_rest_of_the_comment() {
    let (source, problems) = inspect(&Settings::default());
    let edits = DeleteFix::plan(&source, &problems[2]).unwrap();
    let fixed = apply_edits(&source.text, &edits).unwrap();

    assert!(!fixed.contains("@param locale"));
    assert!(fixed.contains("     * @param width maximum characters per line\n"));
    assert!(fixed.contains("Formats the address for printed labels."));
}

#[test]
fn test_fixing_everything_removes_whole_comments() {
    let (source, problems) = inspect(&Settings::default());
    let edits = DeleteFix::plan_all(&source, &problems).unwrap();
    let fixed = apply_edits(&source.text, &edits).unwrap();

    insta::assert_snapshot!(fixed, @r#"
    package shop;

    public class Customer {
        private String postnummer;

        /**
         * Formats the address for printed labels.
         *
         * @param width maximum characters per line
         */
        public String formatAddress(Locale locale, int width) {
            return "";
        }

        public Customer(long id) {}
    }
    "#);

    let reparsed = parse_source("Customer.java", fixed);
    assert!(Inspector::default().inspect(&reparsed).is_empty());
}

#[test]
fn test_deleting_the_last_tag_deletes_the_comment() {
    let source = parse_source(
        "A.java",
        "class A {\n    /**\n     * @return\n     */\n    int size() { return 0; }\n}\n",
    );
    let body_only = Settings {
        compare_with_tags: false,
        ..Settings::default()
    };
    let problems = Inspector::new(&body_only).inspect(&source);
    assert_eq!(
        summary(&problems),
        vec![(3, ProblemKind::MissingReturnDescription)]
    );

    let edits = DeleteFix::plan(&source, &problems[0]).unwrap();
    let fixed = apply_edits(&source.text, &edits).unwrap();
    assert_eq!(fixed, "class A {\n    int size() { return 0; }\n}\n");
}
