// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::annotation::AnnotationBundle;
use crate::errors::AnnotationError;
use crate::traits::AnnotationProvider;

/// Returns the same bundle for every text.
pub struct FixedAnnotator {
    bundle: AnnotationBundle,
}

impl FixedAnnotator {
    pub fn new(bundle: AnnotationBundle) -> Self {
        Self { bundle }
    }
}

impl AnnotationProvider for FixedAnnotator {
    fn annotate(&self, _text: &str) -> Result<AnnotationBundle, AnnotationError> {
        Ok(self.bundle.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// A fixed annotator that records how often, and with what, it was called.
pub struct CountingAnnotator {
    bundle: AnnotationBundle,
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl CountingAnnotator {
    pub fn new(bundle: AnnotationBundle) -> Self {
        Self {
            bundle,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

impl AnnotationProvider for CountingAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotationBundle, AnnotationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        Ok(self.bundle.clone())
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// Always fails with the given error.
pub struct FailingAnnotator {
    error: AnnotationError,
    calls: AtomicUsize,
}

impl FailingAnnotator {
    pub fn new(error: AnnotationError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnnotationProvider for FailingAnnotator {
    fn annotate(&self, _text: &str) -> Result<AnnotationBundle, AnnotationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Panics on any text containing `marker`, otherwise returns an empty bundle.
pub struct PanickingAnnotator {
    pub marker: &'static str,
}

impl AnnotationProvider for PanickingAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotationBundle, AnnotationError> {
        if text.contains(self.marker) {
            panic!("annotator exploded on '{}'", text);
        }
        Ok(AnnotationBundle::default())
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}
