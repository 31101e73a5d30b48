//! Shared fixture drafts for engine tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use draftsmith_core::{
    Builder, Draft, DraftSchema, FieldSpec, Shared, Validate, ValidationResult, Violations,
};
use serde::Serialize;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a warn-level subscriber scoped to this thread and returns
/// everything it logged.
pub fn capture_warnings(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

/// Leaf entity: a named component with a bounded weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Part {
    pub name: String,
    pub weight: f64,
}

impl Validate for Part {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new("Part");
        v.require_text("Name", &self.name)
            .range("Weight", self.weight, 0.0, 100.0);
        v.finish()
    }
}

impl Draft for Part {
    const TYPE_NAME: &'static str = "Part";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Name"))
            .field(FieldSpec::scalar("Weight"))
    }
}

/// Entity exercising every field shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Widget {
    pub name: String,
    pub count: u32,
    pub tags: Vec<String>,
    pub notes: Option<Vec<String>>,
    pub attrs: Option<BTreeMap<String, String>>,
    pub main_part: Part,
    pub spare: Option<Box<Part>>,
    pub mount: Option<Shared<Part>>,
    pub parts: Vec<Part>,
}

impl Validate for Widget {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new("Widget");
        v.require_text("Name", &self.name)
            .range("Count", self.count, 1, 10)
            .nested("MainPart", &self.main_part)
            .nested("Spare", &self.spare)
            .nested("Mount", &self.mount)
            .nested_each("Parts", &self.parts);
        v.finish()
    }
}

impl Draft for Widget {
    const TYPE_NAME: &'static str = "Widget";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Name"))
            .field(FieldSpec::scalar("Count"))
            .field(FieldSpec::sequence("Tags"))
            .field(FieldSpec::sequence("Notes"))
            .field(FieldSpec::map("Attrs"))
            .field(FieldSpec::nested("MainPart"))
            .field(FieldSpec::boxed("Spare"))
            .field(FieldSpec::shared("Mount"))
            .field(FieldSpec::sequence("Parts"))
    }
}

pub fn part(name: &str, weight: f64) -> Builder<Part> {
    Builder::<Part>::new()
        .set(|p| &mut p.name, name)
        .set(|p| &mut p.weight, weight)
}

/// A widget that passes structural validation.
pub fn valid_widget() -> Builder<Widget> {
    Builder::<Widget>::new()
        .set(|w| &mut w.name, "sprocket")
        .set(|w| &mut w.count, 3u32)
        .nest(|w| &mut w.main_part, part("gear", 12.5))
}
