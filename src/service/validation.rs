//! Declarative request validation. Each request type lists its field rules; all
//! violations are collected before anything reaches a repository.

use crate::error::{AppError, FieldError};
use regex::Regex;
use std::fmt::Display;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+\-']+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$";

/// Implemented by every create/update request.
pub trait Validate {
    fn validate(&self, checks: &mut Checks<'_>);
}

/// Shared validator, built once and handed to every service.
#[derive(Clone, Debug)]
pub struct Validator {
    email: Regex,
}

impl Validator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Validator {
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    pub fn validate<T: Validate + ?Sized>(&self, request: &T) -> Result<(), AppError> {
        let mut checks = Checks {
            validator: self,
            errors: Vec::new(),
        };
        request.validate(&mut checks);
        if checks.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(checks.errors))
        }
    }
}

/// Accumulates field violations. At most one violation is recorded per call.
pub struct Checks<'a> {
    validator: &'a Validator,
    errors: Vec<FieldError>,
}

impl Checks<'_> {
    fn fail(&mut self, field: &str, message: String) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    }

    /// Required string whose length (in characters) lies in `min..=max`.
    pub fn length(&mut self, field: &str, value: &str, min: usize, max: usize) -> &mut Self {
        let len = value.chars().count();
        if len == 0 {
            self.fail(field, format!("{} is required", field));
        } else if len < min {
            self.fail(field, format!("{} must be at least {} characters", field, min));
        } else if len > max {
            self.fail(field, format!("{} must be at most {} characters", field, max));
        }
        self
    }

    /// Required string in email syntax.
    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.fail(field, format!("{} is required", field));
        } else if !self.validator.email.is_match(value) {
            self.fail(field, format!("{} must be a valid email", field));
        }
        self
    }

    /// Required number with no range rule. Zero and negatives pass.
    pub fn present<T>(&mut self, field: &str, value: Option<T>) -> &mut Self {
        if value.is_none() {
            self.fail(field, format!("{} is required", field));
        }
        self
    }

    /// Required number that must be at least `min`. Zero passes when `min` allows it.
    pub fn at_least<T>(&mut self, field: &str, value: Option<T>, min: T) -> &mut Self
    where
        T: PartialOrd + Display + Copy,
    {
        match value {
            None => self.fail(field, format!("{} is required", field)),
            Some(v) if v < min => self.fail(field, format!("{} must be at least {}", field, min)),
            Some(_) => {}
        }
        self
    }

    /// Required number strictly greater than `floor`.
    pub fn greater_than<T>(&mut self, field: &str, value: Option<T>, floor: T) -> &mut Self
    where
        T: PartialOrd + Display + Copy,
    {
        match value {
            None => self.fail(field, format!("{} is required", field)),
            Some(v) if v <= floor => {
                self.fail(field, format!("{} must be greater than {}", field, floor))
            }
            Some(_) => {}
        }
        self
    }
}
