use metrics_exporter_prometheus::PrometheusHandle;
use pro_readiness::error::AppError;
use pro_readiness::professionals::readiness::{
    AccountStatus, ProfessionalId, ProfessionalProfile, ProfileRepository, RepositoryError,
    StatusWriter,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local profile store standing in for the marketplace database.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    records: Arc<Mutex<HashMap<ProfessionalId, ProfessionalProfile>>>,
}

impl InMemoryProfileStore {
    pub(crate) fn seeded(profiles: Vec<ProfessionalProfile>) -> Self {
        let store = Self::default();
        {
            let mut guard = store.records.lock().expect("profile store mutex poisoned");
            for profile in profiles {
                guard.insert(profile.professional_id.clone(), profile);
            }
        }
        store
    }

    pub(crate) fn len(&self) -> usize {
        self.records
            .lock()
            .expect("profile store mutex poisoned")
            .len()
    }
}

impl ProfileRepository for InMemoryProfileStore {
    fn fetch_professional_profile(
        &self,
        id: &ProfessionalId,
    ) -> Result<Option<ProfessionalProfile>, RepositoryError> {
        let guard = self.records.lock().expect("profile store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

impl StatusWriter for InMemoryProfileStore {
    fn write_status(
        &self,
        id: &ProfessionalId,
        status: AccountStatus,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("profile store mutex poisoned");
        match guard.get_mut(id) {
            Some(profile) => {
                profile.status = status;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

pub(crate) fn load_seed(path: &Path) -> Result<Vec<ProfessionalProfile>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_seed(&raw)
}

pub(crate) fn parse_seed(raw: &str) -> Result<Vec<ProfessionalProfile>, AppError> {
    Ok(serde_json::from_str(raw)?)
}
