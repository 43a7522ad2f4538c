//! Shared fixtures for the micro-inspect benchmarks.

/// A captured exchange bundled into the benchmark binary.
#[derive(Debug, Copy, Clone)]
pub struct ExchangeFile {
    file_name: &'static str,
    content: &'static str,
}

impl ExchangeFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

/// A named benchmark input and the account it is rendered for.
#[derive(Debug, Copy, Clone)]
pub struct BenchCase {
    name: &'static str,
    file: ExchangeFile,
    paid_user: bool,
}

impl BenchCase {
    pub fn free(name: &'static str, file: ExchangeFile) -> Self {
        Self { name, file, paid_user: false }
    }

    pub fn paid(name: &'static str, file: ExchangeFile) -> Self {
        Self { name, file, paid_user: true }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &ExchangeFile {
        &self.file
    }

    pub fn paid_user(&self) -> bool {
        self.paid_user
    }
}
