//! The fee/PIN access gate.

use tracing::info;

use crate::config::{ConfigLoader, ScaleSet};
use crate::error::{EngineError, EngineResult};
use crate::grading::resolve_grade;
use crate::models::{
    AuditRecord, GradedScore, RequesterContext, ResultView, SchoolLevel, Term,
};
use crate::store::StudentStore;

/// A request to view a student's term result.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    /// The student whose result is requested.
    pub student_id: String,
    /// The requested term.
    pub term: Term,
    /// The requested academic year.
    pub year: i32,
    /// The PIN supplied by the requester.
    pub supplied_pin: String,
}

/// Decides whether a result may be disclosed, and returns it annotated
/// with grades when it may.
///
/// The checks run in a fixed order, and the order is load-bearing:
///
/// 1. student lookup — absent ⇒ [`EngineError::StudentNotFound`]
/// 2. term-fee lookup — absent ⇒ [`EngineError::TermFeeNotFound`]
/// 3. PIN equality — mismatch ⇒ [`EngineError::InvalidPin`]
/// 4. payment — unpaid ⇒ [`EngineError::FeesNotPaid`]
/// 5. publication — unpublished ⇒ [`EngineError::NotPublished`]
/// 6. result lookup — absent ⇒ [`EngineError::ResultNotFound`]
///
/// The PIN check runs before the payment check so a wrong PIN can never
/// reveal payment state. On success an audit entry is recorded and the
/// result is returned with each score graded against the scale set for
/// the student's school level.
///
/// This gate requires no authenticated requester — on the public path
/// the PIN is the credential. Authenticated paths apply
/// [`ensure_owned`](super::ensure_owned) before calling in.
pub fn authorize_result_view(
    store: &dyn StudentStore,
    config: &ConfigLoader,
    request: &ViewRequest,
    requester: &RequesterContext,
) -> EngineResult<ResultView> {
    let student =
        store
            .get(&request.student_id)?
            .ok_or_else(|| EngineError::StudentNotFound {
                student_id: request.student_id.clone(),
            })?;

    let fee = student
        .term_fee(request.term, request.year)
        .ok_or(EngineError::TermFeeNotFound {
            term: request.term,
            year: request.year,
        })?;

    // PIN first: a wrong PIN must not reveal payment or publish state.
    if !fee.pin_matches(&request.supplied_pin) {
        return Err(EngineError::InvalidPin);
    }

    if !fee.paid {
        return Err(EngineError::FeesNotPaid {
            term: request.term,
            year: request.year,
        });
    }

    if !fee.viewable {
        return Err(EngineError::NotPublished {
            term: request.term,
            year: request.year,
        });
    }

    let result = student
        .result(request.term, request.year)
        .ok_or(EngineError::ResultNotFound {
            term: request.term,
            year: request.year,
        })?;

    let scale = config.scale_set(scale_for(student.level));
    let mut scores = Vec::with_capacity(result.scores.len());
    for subject in &result.scores {
        let resolved = resolve_grade(subject.total, &scale)?;
        let passing = config.is_passing_grade(&resolved.grade);
        scores.push(GradedScore {
            subject: subject.subject.clone(),
            score: subject.total,
            grade: resolved.grade,
            remark: resolved.remark,
            passing,
        });
    }

    let audit = AuditRecord::result_view(requester, &student.student_id, request.term, request.year);
    store.record_audit(audit)?;
    info!(
        student_id = %student.student_id,
        term = %request.term,
        year = request.year,
        actor = %requester.audit_actor(),
        "Result disclosed"
    );

    Ok(ResultView {
        student_id: student.student_id.clone(),
        student_name: student.name.clone(),
        term: result.term,
        year: result.year,
        scores,
        comment: result.comment.clone(),
        updated_at: result.updated_at,
        version: result.version,
    })
}

/// The grading scale set for a school level.
fn scale_for(level: SchoolLevel) -> ScaleSet {
    match level {
        SchoolLevel::Primary => ScaleSet::Primary,
        SchoolLevel::Secondary => ScaleSet::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalendarConfig, GradingConfig};
    use crate::models::{SchoolLevel, Student, SubjectScore, TermFee, TermResult};
    use crate::store::InMemoryStudentStore;
    use rust_decimal::Decimal;

    fn test_config() -> ConfigLoader {
        let grading: GradingConfig = serde_yaml::from_str(
            r#"
scales:
  - { scale_set: primary, min: 70, max: 100, grade: A, remark: Excellent }
  - { scale_set: primary, min: 60, max: 69, grade: B, remark: Very Good }
  - { scale_set: primary, min: 50, max: 59, grade: C, remark: Good }
  - { scale_set: primary, min: 45, max: 49, grade: D, remark: Pass }
  - { scale_set: primary, min: 40, max: 44, grade: E, remark: Weak Pass }
  - { scale_set: primary, min: 0, max: 39, grade: F, remark: Fail }
  - { scale_set: secondary, min: 75, max: 100, grade: A1, remark: Excellent }
  - { scale_set: secondary, min: 70, max: 74, grade: B2, remark: Very Good }
  - { scale_set: secondary, min: 65, max: 69, grade: B3, remark: Good }
  - { scale_set: secondary, min: 60, max: 64, grade: C4, remark: Credit }
  - { scale_set: secondary, min: 55, max: 59, grade: C5, remark: Credit }
  - { scale_set: secondary, min: 50, max: 54, grade: C6, remark: Credit }
  - { scale_set: secondary, min: 45, max: 49, grade: D7, remark: Pass }
  - { scale_set: secondary, min: 40, max: 44, grade: E8, remark: Pass }
  - { scale_set: secondary, min: 0, max: 39, grade: F9, remark: Fail }
failing_grades: [F, F9]
"#,
        )
        .unwrap();
        ConfigLoader::from_parts(grading, CalendarConfig { terms: vec![] })
    }

    fn seeded_store() -> InMemoryStudentStore {
        let mut student = Student::new("STU-0042", "Ada Obi", "JSS 2A", SchoolLevel::Secondary);
        student.term_fees.push(TermFee {
            term: Term::First,
            year: 2025,
            amount: Decimal::new(45_000, 0),
            paid: true,
            pin_code: "1234".to_string(),
            viewable: true,
            payment_date: None,
            payment_method: None,
        });
        student.results.push(TermResult {
            term: Term::First,
            year: 2025,
            scores: vec![SubjectScore {
                subject: "Math".to_string(),
                ca1: 18,
                ca2: 19,
                exam: 48,
                total: 85,
            }],
            comment: Some("Great job!".to_string()),
            updated_by: "teacher_001".to_string(),
            updated_at: "2025-12-10T09:30:00Z".parse().unwrap(),
            version: 1,
        });

        let store = InMemoryStudentStore::new();
        store.put(student).unwrap();
        store
    }

    fn view_request(pin: &str) -> ViewRequest {
        ViewRequest {
            student_id: "STU-0042".to_string(),
            term: Term::First,
            year: 2025,
            supplied_pin: pin.to_string(),
        }
    }

    fn mutate_fee(store: &InMemoryStudentStore, f: impl FnOnce(&mut TermFee)) {
        let mut student = store.get("STU-0042").unwrap().unwrap();
        f(&mut student.term_fees[0]);
        store.put(student).unwrap();
    }

    // ==========================================================================
    // AG-001: correct PIN over a paid, published record discloses the result
    // ==========================================================================
    #[test]
    fn test_ag_001_correct_pin_discloses_result() {
        let store = seeded_store();
        let config = test_config();

        let view = authorize_result_view(
            &store,
            &config,
            &view_request("1234"),
            &RequesterContext::anonymous(),
        )
        .unwrap();

        assert_eq!(view.student_id, "STU-0042");
        assert_eq!(view.scores.len(), 1);
        assert_eq!(view.scores[0].subject, "Math");
        assert_eq!(view.scores[0].score, 85);
        assert_eq!(view.scores[0].grade, "A1");
        assert!(view.scores[0].passing);
        assert_eq!(view.comment.as_deref(), Some("Great job!"));
    }

    // ==========================================================================
    // AG-002: wrong PIN is rejected
    // ==========================================================================
    #[test]
    fn test_ag_002_wrong_pin_is_rejected() {
        let store = seeded_store();
        let config = test_config();

        let result = authorize_result_view(
            &store,
            &config,
            &view_request("0000"),
            &RequesterContext::anonymous(),
        );
        assert!(matches!(result, Err(EngineError::InvalidPin)));
    }

    // ==========================================================================
    // AG-003: wrong PIN shadows unpaid fees
    // ==========================================================================
    #[test]
    fn test_ag_003_wrong_pin_shadows_unpaid() {
        let store = seeded_store();
        let config = test_config();
        mutate_fee(&store, |fee| fee.paid = false);

        // Both checks would fail; the PIN error must win so payment
        // state is not revealed.
        let result = authorize_result_view(
            &store,
            &config,
            &view_request("0000"),
            &RequesterContext::anonymous(),
        );
        assert!(matches!(result, Err(EngineError::InvalidPin)));
    }

    // ==========================================================================
    // AG-004: unpaid fees deny even with the right PIN
    // ==========================================================================
    #[test]
    fn test_ag_004_unpaid_denies_with_correct_pin() {
        let store = seeded_store();
        let config = test_config();
        mutate_fee(&store, |fee| fee.paid = false);

        let result = authorize_result_view(
            &store,
            &config,
            &view_request("1234"),
            &RequesterContext::anonymous(),
        );
        assert!(matches!(result, Err(EngineError::FeesNotPaid { .. })));
    }

    // ==========================================================================
    // AG-005: unpublished results deny even when paid
    // ==========================================================================
    #[test]
    fn test_ag_005_unpublished_denies_when_paid() {
        let store = seeded_store();
        let config = test_config();
        mutate_fee(&store, |fee| fee.viewable = false);

        let result = authorize_result_view(
            &store,
            &config,
            &view_request("1234"),
            &RequesterContext::anonymous(),
        );
        assert!(matches!(result, Err(EngineError::NotPublished { .. })));
    }

    // ==========================================================================
    // AG-006: the remaining lookups have distinct not-found kinds
    // ==========================================================================
    #[test]
    fn test_ag_006_missing_student_term_and_result() {
        let store = seeded_store();
        let config = test_config();
        let requester = RequesterContext::anonymous();

        let mut request = view_request("1234");
        request.student_id = "STU-9999".to_string();
        assert!(matches!(
            authorize_result_view(&store, &config, &request, &requester),
            Err(EngineError::StudentNotFound { .. })
        ));

        let mut request = view_request("1234");
        request.term = Term::Second;
        assert!(matches!(
            authorize_result_view(&store, &config, &request, &requester),
            Err(EngineError::TermFeeNotFound { .. })
        ));

        // Fee exists but no result was ever submitted.
        let mut student = store.get("STU-0042").unwrap().unwrap();
        student.results.clear();
        store.put(student).unwrap();
        assert!(matches!(
            authorize_result_view(&store, &config, &view_request("1234"), &requester),
            Err(EngineError::ResultNotFound { .. })
        ));
    }

    #[test]
    fn test_successful_view_is_audited() {
        let store = seeded_store();
        let config = test_config();

        authorize_result_view(
            &store,
            &config,
            &view_request("1234"),
            &RequesterContext::anonymous(),
        )
        .unwrap();

        let trail = store.audit_trail();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].actor, "anonymous");
        assert_eq!(trail[0].student_id, "STU-0042");
    }

    #[test]
    fn test_denied_view_is_not_audited() {
        let store = seeded_store();
        let config = test_config();

        let _ = authorize_result_view(
            &store,
            &config,
            &view_request("0000"),
            &RequesterContext::anonymous(),
        );
        assert!(store.audit_trail().is_empty());
    }

    #[test]
    fn test_primary_student_graded_on_primary_scale() {
        let store = seeded_store();
        let config = test_config();

        let mut student = store.get("STU-0042").unwrap().unwrap();
        student.level = SchoolLevel::Primary;
        store.put(student).unwrap();

        let view = authorize_result_view(
            &store,
            &config,
            &view_request("1234"),
            &RequesterContext::anonymous(),
        )
        .unwrap();
        // 85 is A on the primary scale rather than A1.
        assert_eq!(view.scores[0].grade, "A");
    }
}
