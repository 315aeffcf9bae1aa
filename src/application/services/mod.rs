mod completions;

pub use completions::CompletionService;
