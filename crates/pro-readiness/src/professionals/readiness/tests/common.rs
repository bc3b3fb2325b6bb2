use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::professionals::readiness::domain::{
    AccountStatus, ProfessionalId, ProfessionalProfile, ServiceListing, WalletSummary,
};
use crate::professionals::readiness::repository::{
    ProfileRepository, RepositoryError, StatusWriter,
};
use crate::professionals::readiness::{
    readiness_router, ReadinessPolicy, ReadinessRoutes, ReadinessService,
};

/// Number of criteria a fixture can toggle; the account baseline is always satisfied.
pub(super) const TOGGLEABLE: u8 = 3;

pub(super) fn policy() -> ReadinessPolicy {
    ReadinessPolicy::new(100)
}

pub(super) fn id(raw: &str) -> ProfessionalId {
    ProfessionalId(raw.to_string())
}

pub(super) fn bare_profile(raw_id: &str) -> ProfessionalProfile {
    ProfessionalProfile::new(id(raw_id))
}

pub(super) fn complete_profile(raw_id: &str) -> ProfessionalProfile {
    profile_with(raw_id, (1 << TOGGLEABLE) - 1, true)
}

/// Profile whose toggleable criteria are set according to `mask`, in table order.
pub(super) fn profile_with(
    raw_id: &str,
    mask: u8,
    identity_verified: bool,
) -> ProfessionalProfile {
    let mut profile = bare_profile(raw_id);
    profile.identity_verified = identity_verified;
    if mask & 0b001 != 0 {
        profile.avatar_url = Some("https://cdn.example.test/avatars/pro.png".to_string());
    }
    if mask & 0b010 != 0 {
        profile.services.push(ServiceListing {
            title: "Panel upgrades".to_string(),
            active: true,
        });
    }
    if mask & 0b100 != 0 {
        profile.wallet = Some(WalletSummary {
            wallet_id: format!("wallet-{raw_id}"),
            balance_cents: 0,
        });
    }
    profile
}

pub(super) fn build_service() -> (ReadinessService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service =
        ReadinessService::new(repository.clone(), policy()).expect("fixture policy is valid");
    (service, repository)
}

pub(super) fn router_with<R>(repository: Arc<R>, fetch_budget: Duration) -> axum::Router
where
    R: ProfileRepository + 'static,
{
    readiness_router(ReadinessRoutes {
        service: Arc::new(
            ReadinessService::new(repository, policy()).expect("fixture policy is valid"),
        ),
        writer: Arc::new(MemoryStatusWriter::default()),
        fetch_budget,
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ProfessionalId, ProfessionalProfile>>>,
    fetches: Arc<Mutex<usize>>,
}

impl MemoryRepository {
    pub(super) fn insert(&self, profile: ProfessionalProfile) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(profile.professional_id.clone(), profile);
    }

    pub(super) fn fetch_count(&self) -> usize {
        *self.fetches.lock().expect("counter mutex poisoned")
    }
}

impl ProfileRepository for MemoryRepository {
    fn fetch_professional_profile(
        &self,
        id: &ProfessionalId,
    ) -> Result<Option<ProfessionalProfile>, RepositoryError> {
        *self.fetches.lock().expect("counter mutex poisoned") += 1;
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStatusWriter {
    writes: Arc<Mutex<Vec<(ProfessionalId, AccountStatus)>>>,
}

impl MemoryStatusWriter {
    pub(super) fn writes(&self) -> Vec<(ProfessionalId, AccountStatus)> {
        self.writes.lock().expect("writer mutex poisoned").clone()
    }
}

impl StatusWriter for MemoryStatusWriter {
    fn write_status(
        &self,
        id: &ProfessionalId,
        status: AccountStatus,
    ) -> Result<(), RepositoryError> {
        self.writes
            .lock()
            .expect("writer mutex poisoned")
            .push((id.clone(), status));
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn fetch_professional_profile(
        &self,
        _id: &ProfessionalId,
    ) -> Result<Option<ProfessionalProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct PanickingRepository;

impl ProfileRepository for PanickingRepository {
    fn fetch_professional_profile(
        &self,
        id: &ProfessionalId,
    ) -> Result<Option<ProfessionalProfile>, RepositoryError> {
        panic!("repository must not be reached for {id}");
    }
}

pub(super) struct SlowRepository(pub(super) Duration);

impl ProfileRepository for SlowRepository {
    fn fetch_professional_profile(
        &self,
        id: &ProfessionalId,
    ) -> Result<Option<ProfessionalProfile>, RepositoryError> {
        std::thread::sleep(self.0);
        Ok(Some(ProfessionalProfile::new(id.clone())))
    }
}

pub(super) struct RejectingWriter;

impl StatusWriter for RejectingWriter {
    fn write_status(
        &self,
        _id: &ProfessionalId,
        _status: AccountStatus,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("status store read only".to_string()))
    }
}
