//! Tests for the auth record fallback chain.

use super::*;
use crate::domain::ports::{
    AuthAdminError, AuthProcedureError, MockAuthAdminApi, MockAuthProcedureGateway,
    MockAuthRecordStore,
};
use rstest::rstest;

#[derive(Default)]
struct Doubles {
    procedures: MockAuthProcedureGateway,
    admin: MockAuthAdminApi,
    store: MockAuthRecordStore,
}

impl Doubles {
    fn procedure_returns(
        &mut self,
        procedure: DeletionProcedure,
        result: Result<bool, AuthProcedureError>,
    ) {
        self.procedures
            .expect_invoke()
            .withf(move |candidate, _| *candidate == procedure)
            .times(1)
            .return_once(move |_, _| result);
    }

    fn both_procedures_fail(&mut self) {
        self.procedure_returns(DeletionProcedure::DeleteUserById, Ok(false));
        self.procedure_returns(
            DeletionProcedure::ForceDeleteUser,
            Err(AuthProcedureError::query("function does not exist")),
        );
    }

    fn admin_lookup_returns(&mut self, result: Result<AuthUserLookup, AuthAdminError>) {
        self.admin
            .expect_find_user()
            .times(1)
            .return_once(move |_| result);
    }

    fn admin_untouched(&mut self) {
        self.admin.expect_find_user().never();
        self.admin.expect_delete_user().never();
    }

    fn store_untouched(&mut self) {
        self.store.expect_exists().never();
        self.store.expect_delete().never();
    }

    async fn run(&self) -> EradicationReport {
        let ports = AuthEradicationPorts {
            procedures: &self.procedures,
            admin: &self.admin,
            store: &self.store,
        };
        eradicate_auth_record(ports, &UserId::random()).await
    }
}

fn steps(report: &EradicationReport) -> Vec<&str> {
    report.errors.iter().map(DeletionError::step).collect()
}

fn doubles_succeeding_at(stage: usize) -> Doubles {
    let mut doubles = Doubles::default();
    doubles.procedure_returns(DeletionProcedure::DeleteUserById, Ok(stage == 1));

    if stage >= 2 {
        doubles.procedure_returns(DeletionProcedure::ForceDeleteUser, Ok(stage == 2));
    }

    if stage >= 3 {
        doubles.admin_lookup_returns(Ok(AuthUserLookup::Found));
        doubles
            .admin
            .expect_delete_user()
            .times(1)
            .return_once(move |_| {
                if stage == 3 {
                    Ok(())
                } else {
                    Err(AuthAdminError::rejected(500_u16, "database error deleting user"))
                }
            });
    } else {
        doubles.admin_untouched();
    }

    if stage >= 4 {
        doubles.store.expect_exists().times(1).return_once(|_| Ok(true));
        doubles.store.expect_delete().times(1).return_once(|_| Ok(1));
    } else {
        doubles.store_untouched();
    }
    doubles
}

#[rstest]
#[case(1, DeletionMethod::RpcFunction)]
#[case(2, DeletionMethod::ForceDeleteUser)]
#[case(3, DeletionMethod::AdminApi)]
#[case(4, DeletionMethod::DirectSql)]
#[tokio::test]
async fn later_strategies_are_skipped_once_one_succeeds(
    #[case] stage: usize,
    #[case] expected: DeletionMethod,
) {
    let report = doubles_succeeding_at(stage).run().await;

    assert!(report.success());
    assert_eq!(report.method(), Some(expected));
    assert_eq!(report.errors.len(), stage - 1);
}

#[tokio::test]
async fn missing_auth_record_is_reported_as_not_found() {
    let mut doubles = Doubles::default();
    doubles.both_procedures_fail();
    doubles.admin_lookup_returns(Ok(AuthUserLookup::NotFound));
    doubles.admin.expect_delete_user().never();
    doubles.store_untouched();

    let report = doubles.run().await;

    assert!(report.success());
    assert_eq!(report.method(), Some(DeletionMethod::NotFoundInAuth));
    assert_eq!(report.errors.len(), 2);
}

#[tokio::test]
async fn absent_row_in_sql_check_completes_the_chain() {
    let mut doubles = Doubles::default();
    doubles.both_procedures_fail();
    doubles.admin_lookup_returns(Err(AuthAdminError::rejected(403_u16, "not admin")));
    doubles.admin.expect_delete_user().never();
    doubles.store.expect_exists().times(1).return_once(|_| Ok(false));
    doubles.store.expect_delete().never();

    let report = doubles.run().await;

    assert!(report.success());
    assert_eq!(report.method(), Some(DeletionMethod::NotFoundViaSql));
    assert_eq!(
        steps(&report),
        vec!["rpc_delete_user_by_id", "rpc_force_delete_user", "admin_get_user"]
    );
}

#[tokio::test]
async fn clean_failure_of_every_strategy_exhausts_the_chain() {
    let mut doubles = Doubles::default();
    doubles.both_procedures_fail();
    doubles.admin_lookup_returns(Ok(AuthUserLookup::Found));
    doubles
        .admin
        .expect_delete_user()
        .times(1)
        .return_once(|_| Err(AuthAdminError::rejected(500_u16, "constraint violation")));
    doubles.store.expect_exists().times(1).return_once(|_| Ok(true));
    doubles
        .store
        .expect_delete()
        .times(1)
        .return_once(|_| Err(AuthRecordStoreError::query("permission denied for table users")));

    let report = doubles.run().await;

    assert!(!report.success());
    assert_eq!(report.outcome, EradicationOutcome::Exhausted);
    assert_eq!(report.method(), None);
    assert!(report.errors.len() >= 4);
    assert_eq!(
        steps(&report),
        vec![
            "rpc_delete_user_by_id",
            "rpc_force_delete_user",
            "admin_delete_user",
            "sql_delete_user",
        ]
    );
}

#[tokio::test]
async fn failed_existence_check_still_attempts_the_delete() {
    let mut doubles = Doubles::default();
    doubles.both_procedures_fail();
    doubles.admin_lookup_returns(Err(AuthAdminError::transport("connection refused")));
    doubles.admin.expect_delete_user().never();
    doubles
        .store
        .expect_exists()
        .times(1)
        .return_once(|_| Err(AuthRecordStoreError::query("relation does not exist")));
    doubles.store.expect_delete().times(1).return_once(|_| Ok(1));

    let report = doubles.run().await;

    assert_eq!(report.method(), Some(DeletionMethod::DirectSql));
    assert_eq!(steps(&report).last(), Some(&"sql_check_user"));
}

#[rstest]
#[case::existence_check(true)]
#[case::delete(false)]
#[tokio::test]
async fn unreachable_store_forces_success(#[case] fail_on_exists: bool) {
    let mut doubles = Doubles::default();
    doubles.both_procedures_fail();
    doubles.admin_lookup_returns(Err(AuthAdminError::transport("timeout")));
    doubles.admin.expect_delete_user().never();
    if fail_on_exists {
        doubles
            .store
            .expect_exists()
            .times(1)
            .return_once(|_| Err(AuthRecordStoreError::connection("pool timed out")));
        doubles.store.expect_delete().never();
    } else {
        doubles.store.expect_exists().times(1).return_once(|_| Ok(true));
        doubles
            .store
            .expect_delete()
            .times(1)
            .return_once(|_| Err(AuthRecordStoreError::connection("pool timed out")));
    }

    let report = doubles.run().await;

    assert_eq!(report.outcome, EradicationOutcome::ExceptionExhausted);
    assert!(report.success());
    assert_eq!(report.method(), Some(DeletionMethod::AllMethodsAttempted));
    assert_eq!(steps(&report).last(), Some(&"direct_sql"));
}

#[tokio::test]
async fn network_error_then_falsy_procedure_then_admin_delete() {
    let mut doubles = Doubles::default();
    doubles.procedure_returns(
        DeletionProcedure::DeleteUserById,
        Err(AuthProcedureError::connection("network error")),
    );
    doubles.procedure_returns(DeletionProcedure::ForceDeleteUser, Ok(false));
    doubles.admin_lookup_returns(Ok(AuthUserLookup::Found));
    doubles.admin.expect_delete_user().times(1).return_once(|_| Ok(()));
    doubles.store_untouched();

    let report = doubles.run().await;

    assert!(report.success());
    assert_eq!(report.method(), Some(DeletionMethod::AdminApi));
    assert_eq!(
        steps(&report),
        vec!["rpc_delete_user_by_id", "rpc_force_delete_user"]
    );
    assert!(report.errors[0].message().contains("network error"));
    assert!(report.errors[1].message().contains("reported no deletion"));
}

#[test]
fn method_labels_match_reported_strings() {
    assert_eq!(DeletionMethod::RpcFunction.as_str(), "RPC function");
    assert_eq!(
        DeletionMethod::AllMethodsAttempted.to_string(),
        "all methods attempted"
    );
    assert_eq!(DeletionProcedure::ForceDeleteUser.name(), "force_delete_user");
}
