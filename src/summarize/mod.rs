//! Summarization seams for partitioned groups.
//!
//! Partitioning gives back groups of items; condensing a group into a digest
//! is the caller's business (usually a language-model call). The
//! [`Summarizer`] trait is that seam, and the summarization logic stays
//! outside this crate, supplied via closures or trait implementations.
//!
//! [`BudgetConcat`] is the built-in baseline: it packs a group's texts into a
//! character budget, which doubles as prompt-context assembly for whatever
//! model sits downstream.

/// Trait for summarization strategies.
///
/// Implementors define how a group of items is condensed into a summary.
pub trait Summarizer<T, S = T> {
    /// Summarize a group of items.
    fn summarize(&self, items: &[&T]) -> S;
}

/// Budgeted concatenation summarizer.
///
/// Walks the items in order, skipping blanks, and keeps whole trimmed items
/// until the next one would push the kept total past `max_chars`. The kept
/// items are joined with single spaces; if the separators carry the result
/// past the budget anyway, it is cut and suffixed with `...`.
#[derive(Debug, Clone)]
pub struct BudgetConcat {
    /// Character budget for the assembled summary.
    pub max_chars: usize,
}

impl BudgetConcat {
    /// Create a summarizer with the given character budget.
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Default for BudgetConcat {
    fn default() -> Self {
        Self::new(1200)
    }
}

impl Summarizer<String> for BudgetConcat {
    fn summarize(&self, items: &[&String]) -> String {
        let mut kept: Vec<&str> = Vec::new();
        let mut total = 0;

        for item in items {
            let text = item.trim();
            if text.is_empty() {
                continue;
            }
            if total + text.len() > self.max_chars {
                break;
            }
            kept.push(text);
            total += text.len();
        }

        let joined = kept.join(" ");
        if joined.len() <= self.max_chars {
            return joined;
        }

        // Cut only on a char boundary.
        let mut cut = self.max_chars.saturating_sub(3);
        while !joined.is_char_boundary(cut) {
            cut -= 1;
        }
        let mut truncated = joined[..cut].to_string();
        truncated.push_str("...");
        truncated
    }
}

/// A function-based summarizer.
#[derive(Clone)]
pub struct FnSummarizer<F> {
    f: F,
}

impl<F> FnSummarizer<F> {
    /// Create a summarizer from a function.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, S, F> Summarizer<T, S> for FnSummarizer<F>
where
    F: Fn(&[&T]) -> S,
{
    fn summarize(&self, items: &[&T]) -> S {
        (self.f)(items)
    }
}

/// Create a summarizer from a closure.
pub fn from_fn<T, S, F>(f: F) -> FnSummarizer<F>
where
    F: Fn(&[&T]) -> S,
{
    FnSummarizer::new(f)
}
