//! Structural validation contract and the two-phase validation pipeline.

use std::fmt;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, warn};

use crate::builder::CustomValidator;
use crate::error::{StructuralError, Violation, ViolationKind};
use crate::{Draft, EngineConfig, Shared, ValidationError, ValidationResult};

/// Calendar-date format accepted by [`Violations::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An entity's intrinsic structural check.
///
/// Implementations should collect every independent failure through
/// [`Violations`] instead of returning on the first one.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> ValidationResult {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> ValidationResult {
        (**self).validate()
    }
}

impl<T: Validate> Validate for Shared<T> {
    fn validate(&self) -> ValidationResult {
        self.borrow().validate()
    }
}

/// Collects field-level violations for one entity.
///
/// Format checks (`one_of`, `date`, `pattern`) skip empty values; pair them
/// with [`require_text`](Self::require_text) when the field is mandatory.
#[derive(Debug)]
pub struct Violations {
    entity: String,
    items: Vec<Violation>,
}

impl Violations {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, violation: Violation) -> &mut Self {
        self.items.push(violation);
        self
    }

    fn add(&mut self, field: &str, kind: ViolationKind) -> &mut Self {
        self.push(Violation::new(field, kind))
    }

    /// Records a free-form violation.
    pub fn other(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.add(field, ViolationKind::Other(message.into()))
    }

    /// Fails `field` unless `present`.
    pub fn require(&mut self, field: &str, present: bool) -> &mut Self {
        if !present {
            self.add(field, ViolationKind::Missing);
        }
        self
    }

    /// Fails `field` if `value` is empty or whitespace.
    pub fn require_text(&mut self, field: &str, value: &str) -> &mut Self {
        self.require(field, !value.trim().is_empty())
    }

    /// Fails `field` unless `min <= value <= max`. NaN is always out of range.
    pub fn range<N>(&mut self, field: &str, value: N, min: N, max: N) -> &mut Self
    where
        N: Into<f64> + Copy,
    {
        let (value, min, max) = (value.into(), min.into(), max.into());
        if !(min..=max).contains(&value) {
            self.add(field, ViolationKind::OutOfRange { value, min, max });
        }
        self
    }

    /// Fails `field` unless `value` is one of `allowed`.
    pub fn one_of(&mut self, field: &str, value: &str, allowed: &[&str]) -> &mut Self {
        if !value.is_empty() && !allowed.contains(&value) {
            self.add(
                field,
                ViolationKind::NotAllowed {
                    value: value.to_string(),
                    allowed: allowed.iter().map(|s| (*s).to_string()).collect(),
                },
            );
        }
        self
    }

    /// Fails `field` unless `value` is a `YYYY-MM-DD` calendar date.
    pub fn date(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.is_empty() && parse_date(value).is_none() {
            self.add(
                field,
                ViolationKind::InvalidDate {
                    value: value.to_string(),
                },
            );
        }
        self
    }

    /// Fails `field` unless `value` matches `pattern`.
    pub fn pattern(&mut self, field: &str, value: &str, pattern: &Regex) -> &mut Self {
        if !value.is_empty() && !pattern.is_match(value) {
            self.add(
                field,
                ViolationKind::PatternMismatch {
                    value: value.to_string(),
                    pattern: pattern.as_str().to_string(),
                },
            );
        }
        self
    }

    /// Fails `later_field` if `later` sorts before `earlier`.
    pub fn ordered<V>(
        &mut self,
        earlier_field: &str,
        later_field: &str,
        earlier: &V,
        later: &V,
    ) -> &mut Self
    where
        V: PartialOrd + fmt::Display + ?Sized,
    {
        if later < earlier {
            self.add(
                later_field,
                ViolationKind::OutOfOrder {
                    earlier_field: earlier_field.to_string(),
                    earlier: earlier.to_string(),
                    later: later.to_string(),
                },
            );
        }
        self
    }

    /// Date flavour of [`ordered`](Self::ordered). Only compares when both
    /// values parse; malformed dates are reported by [`date`](Self::date).
    pub fn ordered_dates(
        &mut self,
        earlier_field: &str,
        later_field: &str,
        earlier: &str,
        later: &str,
    ) -> &mut Self {
        if let (Some(a), Some(b)) = (parse_date(earlier), parse_date(later)) {
            if b < a {
                self.add(
                    later_field,
                    ViolationKind::OutOfOrder {
                        earlier_field: earlier_field.to_string(),
                        earlier: earlier.to_string(),
                        later: later.to_string(),
                    },
                );
            }
        }
        self
    }

    /// Runs the structural validator of a sub-entity and folds its failure
    /// in under `field`.
    pub fn nested(&mut self, field: &str, value: &impl Validate) -> &mut Self {
        if let Err(err) = value.validate() {
            self.add(field, ViolationKind::Nested(Box::new(err)));
        }
        self
    }

    /// [`nested`](Self::nested) for each element, reported as `field[i]`.
    pub fn nested_each<V: Validate>(&mut self, field: &str, items: &[V]) -> &mut Self {
        for (i, item) in items.iter().enumerate() {
            self.nested(&format!("{field}[{i}]"), item);
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `Ok` when nothing was recorded, otherwise one aggregated error.
    pub fn finish(self) -> ValidationResult {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(StructuralError::new(self.entity, self.items).into())
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Runs custom validators in registration order, stopping at the first
/// failure, then the draft's structural validator.
///
/// A custom failure is returned alone; structural validation does not run.
pub fn run_pipeline<T: Draft>(
    draft: &T,
    validators: &[CustomValidator<T>],
    config: &EngineConfig,
) -> ValidationResult {
    debug!(entity = T::TYPE_NAME, count = validators.len(), "Running custom validators");
    for (index, validator) in validators.iter().enumerate() {
        if let Err(message) = validator(draft) {
            let err = ValidationError::Custom {
                index,
                message,
                prefix: config.custom_prefix.clone(),
            };
            report::<T>(config, &err);
            return Err(err);
        }
    }

    debug!(entity = T::TYPE_NAME, "Running structural validation");
    draft.validate().inspect_err(|err| report::<T>(config, err))
}

fn report<T: Draft>(config: &EngineConfig, err: &ValidationError) {
    if config.log_failures {
        warn!(entity = T::TYPE_NAME, error = %err, "Draft failed validation");
    }
}
