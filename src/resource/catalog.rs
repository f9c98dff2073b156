//! Every REST entity the server exposes.
//!
//! Paths are literal and must not be normalized: some entries carry no leading
//! slash, some expect a trailing slash on `list` or `create`, and the server
//! relies on both.

use super::descriptor::{ResourceDescriptor, Verb, LIST_ONLY, NO_VERBS};

const CRUD_AND_COMPOSITE: &[Verb] = &[
    Verb::List,
    Verb::Get,
    Verb::Create,
    Verb::Update,
    Verb::Delete,
    Verb::DeleteComposite,
];

pub const APPLICATIONS: ResourceDescriptor = ResourceDescriptor::crud("applications", "/applications");
pub const CASE_PRIORITIES: ResourceDescriptor =
    ResourceDescriptor::crud("case_priorities", "/case_priorities");
pub const CASE_SEVERITIES: ResourceDescriptor =
    ResourceDescriptor::crud("case_severities", "/case_severities");
pub const CASE_TYPES: ResourceDescriptor = ResourceDescriptor::crud("case_types", "/case_types");
pub const CASE_COST_TYPES: ResourceDescriptor =
    ResourceDescriptor::crud("case_cost_types", "/case_cost_types");
pub const COST_MODELS: ResourceDescriptor = ResourceDescriptor::crud("cost_models", "cost_models");

pub const DATA_ALERTS: ResourceDescriptor = ResourceDescriptor::crud("data_alerts", "/data/alerts");
pub const DATA_QUERIES: ResourceDescriptor =
    ResourceDescriptor::crud("data_queries", "/data/queries");
pub const DATA_SOURCES: ResourceDescriptor =
    ResourceDescriptor::crud("data_sources", "/data/sources");
pub const DATA_SOURCE_DATA_FORMATS: ResourceDescriptor =
    ResourceDescriptor::crud("data_source_data_formats", "/data/sources/dataFormats");
pub const DATA_SOURCE_ENVIRONMENTS: ResourceDescriptor =
    ResourceDescriptor::crud("data_source_environments", "/data/sources/environments");
pub const DATA_SOURCE_STATUSES: ResourceDescriptor =
    ResourceDescriptor::crud("data_source_statuses", "/data/sources/statuses");
pub const DATA_SOURCE_TRANSPORTS: ResourceDescriptor =
    ResourceDescriptor::crud("data_source_transports", "/data/sources/transports");
pub const DATA_SOURCE_TYPES: ResourceDescriptor =
    ResourceDescriptor::crud("data_source_types", "/data/sources/types");

pub const DEFINITIONS: ResourceDescriptor =
    ResourceDescriptor::crud("definitions", "/definitions").with_create_slash();
pub const DOCUMENTS: ResourceDescriptor =
    ResourceDescriptor::crud("documents", "/documents").with_create_slash();
pub const EMAIL_TEMPLATES: ResourceDescriptor =
    ResourceDescriptor::crud("email_template", "/email_template");
pub const FEEDBACK: ResourceDescriptor = ResourceDescriptor::crud("feedback", "/feedback");
pub const SERVICE_FEEDBACK: ResourceDescriptor =
    ResourceDescriptor::crud("service_feedback", "/service_feedback").with_verbs(LIST_ONLY);
pub const FORMS_TYPES: ResourceDescriptor = ResourceDescriptor::crud("forms_type", "/forms_type");

pub const INCIDENT_SEVERITIES: ResourceDescriptor =
    ResourceDescriptor::crud("incident_severities", "/incident_severities");
pub const INCIDENT_COSTS: ResourceDescriptor =
    ResourceDescriptor::crud("incident_costs", "/incident_costs");
pub const INCIDENT_COST_MODELS: ResourceDescriptor =
    ResourceDescriptor::crud("incident_cost_models", "/incident_cost_models");
pub const INCIDENT_COST_TYPES: ResourceDescriptor =
    ResourceDescriptor::crud("incident_cost_types", "/incident_cost_types");
pub const INCIDENT_PRIORITIES: ResourceDescriptor =
    ResourceDescriptor::crud("incident_priorities", "/incident_priorities");
/// Role-keyed; use [`IncidentRoleClient`](super::IncidentRoleClient).
pub const INCIDENT_ROLES: ResourceDescriptor =
    ResourceDescriptor::crud("incident_roles", "/incident_roles").with_verbs(NO_VERBS);
pub const INCIDENT_TYPES: ResourceDescriptor =
    ResourceDescriptor::crud("incident_types", "/incident_types");

pub const INDIVIDUALS: ResourceDescriptor =
    ResourceDescriptor::crud("individuals", "/individuals").with_create_slash();
pub const NOTIFICATIONS: ResourceDescriptor =
    ResourceDescriptor::crud("notifications", "/notifications");
pub const ORGANIZATIONS: ResourceDescriptor =
    ResourceDescriptor::crud("organizations", "/organizations");
pub const PLUGINS: ResourceDescriptor = ResourceDescriptor::crud("plugins", "plugins");
pub const PLUGIN_INSTANCES: ResourceDescriptor =
    ResourceDescriptor::crud("plugin_instances", "plugins/instances");
pub const POLICIES: ResourceDescriptor =
    ResourceDescriptor::crud("policies", "/policies").with_create_slash();
pub const PROJECTS: ResourceDescriptor = ResourceDescriptor::crud("projects", "projects");
pub const AI: ResourceDescriptor = ResourceDescriptor::crud("ai", "/ai");
/// Query-only; use [`SearchClient`](super::SearchClient).
pub const SEARCH: ResourceDescriptor = ResourceDescriptor::crud("search", "/search/")
    .with_list_slash()
    .with_verbs(NO_VERBS);
pub const SERVICES: ResourceDescriptor =
    ResourceDescriptor::crud("services", "/services").with_create_slash();

pub const SIGNALS: ResourceDescriptor =
    ResourceDescriptor::crud("signals", "signals").with_verbs(CRUD_AND_COMPOSITE);
pub const SIGNAL_DUPLICATION_RULES: ResourceDescriptor =
    ResourceDescriptor::crud("signal_duplication_rules", "/signals/duplication/rules");
pub const SIGNAL_ENGAGEMENTS: ResourceDescriptor =
    ResourceDescriptor::crud("signal_engagements", "/signals/engagements");
pub const SIGNAL_FILTERS: ResourceDescriptor =
    ResourceDescriptor::crud("signal_filters", "/signals/filters");
pub const SIGNAL_SUPPRESSION_RULES: ResourceDescriptor =
    ResourceDescriptor::crud("signal_suppression_rules", "/signals/suppression/rules");
/// Duplicate of [`SIGNAL_SUPPRESSION_RULES`] under the misspelled path. Which
/// spelling a given server accepts has to be confirmed against that server.
pub const SIGNAL_SUPRESSION_RULES: ResourceDescriptor =
    ResourceDescriptor::crud("signal_supression_rules", "/signals/supression/rules");

pub const TAG_TYPES: ResourceDescriptor = ResourceDescriptor::crud("tag_types", "/tag_types");
pub const TEAMS: ResourceDescriptor =
    ResourceDescriptor::crud("teams", "/teams").with_create_slash();
pub const TERMS: ResourceDescriptor =
    ResourceDescriptor::crud("terms", "/terms").with_create_slash();
pub const WORKSTREAM_TYPES: ResourceDescriptor =
    ResourceDescriptor::crud("workstream_types", "/workstream_types");

pub const ALL: &[ResourceDescriptor] = &[
    APPLICATIONS,
    CASE_PRIORITIES,
    CASE_SEVERITIES,
    CASE_TYPES,
    CASE_COST_TYPES,
    COST_MODELS,
    DATA_ALERTS,
    DATA_QUERIES,
    DATA_SOURCES,
    DATA_SOURCE_DATA_FORMATS,
    DATA_SOURCE_ENVIRONMENTS,
    DATA_SOURCE_STATUSES,
    DATA_SOURCE_TRANSPORTS,
    DATA_SOURCE_TYPES,
    DEFINITIONS,
    DOCUMENTS,
    EMAIL_TEMPLATES,
    FEEDBACK,
    SERVICE_FEEDBACK,
    FORMS_TYPES,
    INCIDENT_SEVERITIES,
    INCIDENT_COSTS,
    INCIDENT_COST_MODELS,
    INCIDENT_COST_TYPES,
    INCIDENT_PRIORITIES,
    INCIDENT_ROLES,
    INCIDENT_TYPES,
    INDIVIDUALS,
    NOTIFICATIONS,
    ORGANIZATIONS,
    PLUGINS,
    PLUGIN_INSTANCES,
    POLICIES,
    PROJECTS,
    AI,
    SEARCH,
    SERVICES,
    SIGNALS,
    SIGNAL_DUPLICATION_RULES,
    SIGNAL_ENGAGEMENTS,
    SIGNAL_FILTERS,
    SIGNAL_SUPPRESSION_RULES,
    SIGNAL_SUPRESSION_RULES,
    TAG_TYPES,
    TEAMS,
    TERMS,
    WORKSTREAM_TYPES,
];

/// Look a descriptor up by catalog name.
pub fn find(name: &str) -> Option<&'static ResourceDescriptor> {
    ALL.iter().find(|d| d.name == name)
}
