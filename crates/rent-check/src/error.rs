//! Terminal errors of a report request.
//!
//! Messages are meant for direct display to the tenant. No variant is
//! retried by the engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// No candidate, or the geocoder could not be reached in time
    #[error("Adresse introuvable. Veuillez vérifier et réessayer.")]
    AddressNotFound { reason: String },

    #[error("L'adresse n'a pas pu être localisée avec certitude (score: {:.0}%). Veuillez vérifier l'adresse.", .score * 100.0)]
    AddressAmbiguous { score: f64 },

    #[error("L'adresse ne semble pas être à Paris. Seule la ville de Paris est couverte actuellement.")]
    UnsupportedCoverage { citycode: String },

    #[error("Impossible de déterminer le quartier pour cette adresse. Vérifiez que l'adresse est bien à Paris.")]
    ZoneNotFound { latitude: f64, longitude: f64 },

    #[error("Référence de loyer introuvable pour le quartier \"{zone}\" avec les paramètres spécifiés.")]
    ReferenceNotFound { zone: String },
}

impl ReportError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ReportError::AddressNotFound { .. } => "ADDRESS_NOT_FOUND",
            ReportError::AddressAmbiguous { .. } => "ADDRESS_AMBIGUOUS",
            ReportError::UnsupportedCoverage { .. } => "UNSUPPORTED_COVERAGE",
            ReportError::ZoneNotFound { .. } => "ZONE_NOT_FOUND",
            ReportError::ReferenceNotFound { .. } => "REFERENCE_NOT_FOUND",
        }
    }

    pub(crate) fn address_not_found(reason: impl Into<String>) -> Self {
        ReportError::AddressNotFound {
            reason: reason.into(),
        }
    }
}
