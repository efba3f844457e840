//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    calculators, equipment, expertises, health, registry, schedule, specialists, td_reports,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EPB API",
        version = "1.0.0",
        description = "Industrial safety expertise and NDT record-keeping REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::add_verification,
        // Specialists
        specialists::list_specialists,
        specialists::get_specialist,
        specialists::create_specialist,
        specialists::update_specialist,
        specialists::delete_specialist,
        specialists::add_cert,
        // Expertises
        expertises::list_expertises,
        expertises::get_expertise,
        expertises::create_expertise,
        expertises::update_expertise,
        expertises::delete_expertise,
        // Technical diagnostics
        td_reports::list_td_reports,
        td_reports::get_td_report,
        td_reports::create_td_report,
        td_reports::update_td_report,
        td_reports::delete_td_report,
        td_reports::export_td_reports,
        // Registry
        registry::list_registry,
        registry::get_registry_entry,
        registry::create_registry_entry,
        registry::update_registry_entry,
        registry::delete_registry_entry,
        registry::export_registry,
        // Schedule
        schedule::get_schedule,
        schedule::get_schedule_months,
        // Calculators
        calculators::residual_life,
        calculators::residual_history,
        calculators::wall_thickness,
        calculators::corrosion_rate,
    ),
    components(
        schemas(
            // Enums
            crate::models::enums::NkMethod,
            crate::models::enums::EquipCategory,
            crate::models::enums::NkLevel,
            crate::models::enums::OwnerType,
            crate::models::enums::EquipmentState,
            crate::models::enums::EquipmentStatus,
            crate::models::enums::SpecialistState,
            crate::models::enums::SpecialistStatus,
            crate::models::enums::ExpiryStatus,
            crate::models::enums::ExpertiseStatus,
            crate::models::enums::TdStatus,
            crate::models::enums::RegistryStatus,
            crate::models::enums::RtnStatus,
            // Equipment
            crate::models::equipment::Verification,
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentDetails,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::CreateVerification,
            // Specialists
            crate::models::specialist::NkCert,
            crate::models::specialist::NkSpecialist,
            crate::models::specialist::SpecialistDetails,
            crate::models::specialist::CreateSpecialist,
            crate::models::specialist::UpdateSpecialist,
            crate::models::specialist::CreateCert,
            // Expertises
            crate::models::expertise::Expertise,
            crate::models::expertise::CreateExpertise,
            crate::models::expertise::UpdateExpertise,
            // Technical diagnostics
            crate::models::td_report::NkProtocol,
            crate::models::td_report::TdReport,
            crate::models::td_report::CreateTdReport,
            crate::models::td_report::UpdateTdReport,
            crate::models::td_report::CreateProtocol,
            // Registry
            crate::models::registry::RegistryEntry,
            crate::models::registry::CreateRegistryEntry,
            crate::models::registry::UpdateRegistryEntry,
            // Schedule
            crate::models::schedule::ScheduleKind,
            crate::models::schedule::ScheduleStatus,
            crate::models::schedule::ScheduleItem,
            crate::models::schedule::ScheduleMonth,
            // Calculators
            crate::models::calculator::ResidualLifeInput,
            crate::models::calculator::ResidualLifeResult,
            crate::models::calculator::ResidualVerdict,
            crate::models::calculator::ResidualHistoryEntry,
            crate::models::calculator::WallThicknessInput,
            crate::models::calculator::WallThicknessResult,
            crate::models::calculator::WallVerdict,
            crate::models::calculator::CorrosionMeasurement,
            crate::models::calculator::CorrosionRateResult,
            crate::models::calculator::CorrosionTrend,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment and verification tracking"),
        (name = "specialists", description = "NDT specialist certification tracking"),
        (name = "expertises", description = "Industrial safety expertise workflow"),
        (name = "td-reports", description = "Technical diagnostics reports"),
        (name = "registry", description = "Registry of signed conclusions"),
        (name = "schedule", description = "Upcoming verification and certification deadlines"),
        (name = "calculators", description = "Engineering calculators")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
