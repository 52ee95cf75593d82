//! File-level check runs.

use std::fs;
use std::path::PathBuf;

use redundoc_check::{Inspector, ProblemKind};
use redundoc_cli::report::{CheckOptions, check_paths};
use tempfile::TempDir;

const ACCOUNT: &str = "\
/**
 * Account.
 */
public class Account {
    /**
     * Closes the account and notifies the owner.
     *
     * @param reason the reason
     */
    public void close(String reason) {}
}
";

const CLEAN: &str = "\
/** Ledger entries grouped by settlement day. */
class Ledger {}
";

fn options(fix: bool) -> CheckOptions {
    CheckOptions {
        extensions: vec!["java".to_string()],
        fix,
    }
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/Account.java"), ACCOUNT).unwrap();
    fs::write(dir.path().join("src/Ledger.java"), CLEAN).unwrap();
    fs::write(dir.path().join("src/notes.txt"), "/** Account. */").unwrap();
    dir
}

#[test]
fn test_reports_problems_per_file() {
    let dir = workspace();
    let report = check_paths(
        &[dir.path().to_path_buf()],
        &Inspector::default(),
        &options(false),
    )
    .unwrap();

    assert_eq!(report.files.len(), 2);
    assert!(report.errors.is_empty());
    assert_eq!(report.problem_count(), 2);

    let account = &report.files[0];
    assert!(account.path.ends_with("Account.java"));
    let kinds: Vec<ProblemKind> = account.problems.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ProblemKind::CommentMatchesName,
            ProblemKind::ParamMatchesParamName
        ]
    );
    assert!(!account.fixed);
    assert!(report.files[1].problems.is_empty());
}

#[test]
fn test_fix_rewrites_flagged_files_only() {
    let dir = workspace();
    let report = check_paths(
        &[dir.path().join("src")],
        &Inspector::default(),
        &options(true),
    )
    .unwrap();
    assert!(report.files[0].fixed);
    assert!(!report.files[1].fixed);

    let fixed = fs::read_to_string(dir.path().join("src/Account.java")).unwrap();
    insta::assert_snapshot!(fixed, @r"
    public class Account {
        /**
         * Closes the account and notifies the owner.
         *
         */
        public void close(String reason) {}
    }
    ");
    assert_eq!(
        fs::read_to_string(dir.path().join("src/Ledger.java")).unwrap(),
        CLEAN
    );

    let again = check_paths(
        &[dir.path().to_path_buf()],
        &Inspector::default(),
        &options(false),
    )
    .unwrap();
    assert!(!again.has_problems());
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing: PathBuf = dir.path().join("nope");
    let error = check_paths(&[missing], &Inspector::default(), &options(false)).unwrap_err();
    assert!(error.to_string().starts_with("discover sources in"));
}

#[test]
fn test_json_report_lists_problems() {
    let dir = workspace();
    let report = check_paths(
        &[dir.path().join("src/Account.java")],
        &Inspector::default(),
        &options(false),
    )
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let problems = &json["files"][0]["problems"];
    assert_eq!(problems[0]["kind"], "comment-matches-name");
    assert_eq!(problems[1]["target"]["kind"], "tag");
    assert_eq!(problems[1]["target"]["index"], 0);
    assert_eq!(json["files"][0]["fixed"], false);
}
