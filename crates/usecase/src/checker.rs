use slide_access_domain::{AccessDecision, Slide, VisitorProfile};
use slide_access_ports::diagnostics::{DenialNotice, DiagnosticSink};
use slide_access_shared_kernel::{ApplicationError, Result};

use crate::dto::{AccessOutcome, AccessReport, CheckAccessInput};

pub struct SlideAccessChecker<'a> {
    sink: &'a dyn DiagnosticSink,
}

impl<'a> SlideAccessChecker<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// `true` if `visitor` may ride `slide`.
    ///
    /// Denials are reported to the sink and come back as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Only a failing sink produces an error.
    pub fn can_access(&self, slide: &Slide, visitor: &VisitorProfile) -> Result<bool> {
        self.check(slide, visitor).map(|outcome| outcome.granted)
    }

    /// Same as [`Self::can_access`] but keeps the details of the decision.
    ///
    /// # Errors
    ///
    /// Only a failing sink produces an error.
    pub fn check(&self, slide: &Slide, visitor: &VisitorProfile) -> Result<AccessOutcome> {
        let decision = slide.evaluate(visitor);
        tracing::debug!(
            slide = slide.name(),
            visitor = visitor.name(),
            granted = decision.is_granted(),
            "access checked"
        );

        let mut outcome = AccessOutcome {
            slide: slide.name().to_string(),
            category: slide.category(),
            visitor: visitor.name().to_string(),
            granted: true,
            kind: None,
            reason: None,
        };

        if let AccessDecision::Denied(denial) = decision {
            let notice = DenialNotice {
                slide: outcome.slide.clone(),
                visitor: outcome.visitor.clone(),
                kind: denial.kind(),
                message: denial.diagnostic(visitor.name()),
            };
            self.sink.on_denied(&notice)?;

            outcome.granted = false;
            outcome.kind = Some(denial.kind());
            outcome.reason = Some(denial.error().to_string());
        }

        Ok(outcome)
    }

    /// Checks every visitor against every slide, slide by slide.
    ///
    /// # Errors
    ///
    /// Stops at the first sink failure and returns it wrapped in
    /// [`ApplicationError::CheckFailed`].
    pub fn run(&self, input: &CheckAccessInput) -> Result<AccessReport> {
        let mut report = AccessReport {
            outcomes: Vec::with_capacity(input.slides.len() * input.visitors.len()),
        };

        for slide in &input.slides {
            for visitor in &input.visitors {
                let outcome = self.check(slide, visitor).map_err(|e| ApplicationError::CheckFailed {
                    slide: slide.name().to_string(),
                    visitor: visitor.name().to_string(),
                    reason: "diagnostic sink failed".to_string(),
                    source: Some(Box::new(e)),
                })?;
                report.outcomes.push(outcome);
            }
        }

        tracing::info!(
            checks = report.outcomes.len(),
            granted = report.granted(),
            denied = report.denied(),
            "access run finished"
        );
        Ok(report)
    }
}
