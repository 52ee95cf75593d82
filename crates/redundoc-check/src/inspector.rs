//! Doc comment inspection.

use redundoc_model::{DocComment, DocOwner, DocTag};

use crate::judge::{Judge, Target, Verdict};
use crate::problem::{Problem, ProblemKind, ProblemTarget};
use crate::settings::Settings;
use crate::tree::{DocNode, walk};

/// Checks doc comments against the declarations they document.
#[derive(Debug, Clone)]
pub struct Inspector {
    judge: Judge,
    compare_with_tags: bool,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Inspector {
    /// Builds an inspector from resolved settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            judge: settings.judge(),
            compare_with_tags: settings.compare_with_tags,
        }
    }

    /// The decision policy used for every comparison.
    pub fn judge(&self) -> &Judge {
        &self.judge
    }

    /// Inspects every doc comment under `node`.
    pub fn inspect(&self, node: &dyn DocNode) -> Vec<Problem> {
        let mut problems = Vec::new();
        walk(node, &mut |comment| {
            problems.extend(self.inspect_comment(comment));
        });
        problems
    }

    /// Inspects one comment.
    ///
    /// An empty comment, or one that as a whole restates its owner, yields a
    /// single comment-level problem and its tags are not checked.
    pub fn inspect_comment(&self, comment: &DocComment) -> Vec<Problem> {
        if comment.is_empty() {
            return vec![Problem::new(
                ProblemKind::EmptyComment,
                ProblemTarget::Comment,
                comment.span,
            )];
        }

        if let Some(problem) = self.check_summary(comment) {
            tracing::debug!(line = comment.span.line, kind = %problem.kind, "comment problem");
            return vec![problem];
        }

        let Some(owner) = &comment.owner else {
            return Vec::new();
        };

        let mut problems = Vec::new();
        for (idx, tag) in comment.find_tags("param") {
            problems.extend(self.check_param(owner, idx, tag));
        }
        for (idx, tag) in comment.find_tags("return") {
            problems.extend(self.check_return(owner, idx, tag));
        }
        for problem in &problems {
            tracing::debug!(line = problem.span.line, kind = %problem.kind, "tag problem");
        }
        problems
    }

    fn check_summary(&self, comment: &DocComment) -> Option<Problem> {
        let text = comment.text(self.compare_with_tags);
        if text.is_empty() {
            return None;
        }

        let targets = match &comment.owner {
            Some(owner) => vec![
                Target::Name(&owner.name),
                Target::Type(owner.presentable_type()),
            ],
            None => Vec::new(),
        };

        let problem = |kind| Problem::new(kind, ProblemTarget::Comment, comment.span);
        match self.judge.verdict(&text, &targets) {
            Verdict::EmptyContent => Some(problem(ProblemKind::UninformativeComment)),
            Verdict::TooSimilarToName(similarity) => {
                Some(problem(ProblemKind::CommentMatchesName).with_similarity(similarity))
            }
            Verdict::TooSimilarToType(similarity) => {
                Some(problem(ProblemKind::CommentMatchesType).with_similarity(similarity))
            }
            Verdict::Acceptable => None,
        }
    }

    fn check_param(&self, owner: &DocOwner, idx: usize, tag: &DocTag) -> Option<Problem> {
        let problem = |kind| Problem::new(kind, ProblemTarget::Tag(idx), tag.span);
        let Some(param) = &tag.value else {
            return Some(problem(ProblemKind::MissingParamName));
        };

        match self.judge.verdict(&tag.text, &[Target::Name(param)]) {
            Verdict::EmptyContent => Some(problem(ProblemKind::MissingParamDescription)),
            Verdict::TooSimilarToName(similarity) | Verdict::TooSimilarToType(similarity) => {
                Some(problem(ProblemKind::ParamMatchesParamName).with_similarity(similarity))
            }
            Verdict::Acceptable => self
                .judge
                .too_similar(&tag.text, Target::Name(&owner.name))
                .map(|similarity| {
                    problem(ProblemKind::ParamMatchesOwnerName).with_similarity(similarity)
                }),
        }
    }

    fn check_return(&self, owner: &DocOwner, idx: usize, tag: &DocTag) -> Option<Problem> {
        let problem = |kind| Problem::new(kind, ProblemTarget::Tag(idx), tag.span);
        if tag.value.is_none() {
            return Some(problem(ProblemKind::MissingReturnDescription));
        }

        let targets = [
            Target::Type(owner.presentable_type()),
            Target::Name(&owner.name),
        ];
        match self.judge.verdict(&tag.data(), &targets) {
            Verdict::EmptyContent => Some(problem(ProblemKind::MissingReturnDescription)),
            Verdict::TooSimilarToType(similarity) => {
                Some(problem(ProblemKind::ReturnMatchesType).with_similarity(similarity))
            }
            Verdict::TooSimilarToName(similarity) => {
                Some(problem(ProblemKind::ReturnMatchesOwnerName).with_similarity(similarity))
            }
            Verdict::Acceptable => None,
        }
    }
}
