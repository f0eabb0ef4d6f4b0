//! Resource definitions and their backbone elements

use super::{def, many, one, req, req_many, TypeDefinition};

const DOMAIN: Option<&str> = Some("DomainResource");
const BACKBONE: Option<&str> = Some("BackboneElement");

pub(super) static TYPES: &[TypeDefinition] = &[
    def(
        "Resource",
        None,
        &[
            one("id", "id"),
            one("implicitRules", "uri"),
            one("language", "code"),
            one("meta", "Meta"),
        ],
    ),
    def(
        "DomainResource",
        Some("Resource"),
        &[
            many("contained", "Resource"),
            many("extension", "Extension"),
            many("modifierExtension", "Extension"),
            one("text", "Narrative"),
        ],
    ),
    // Account
    def(
        "Account",
        DOMAIN,
        &[
            many("coverage", "Account.coverage"),
            one("description", "string"),
            many("guarantor", "Account.guarantor"),
            many("identifier", "Identifier"),
            one("name", "string"),
            one("owner", "Reference"),
            one("partOf", "Reference"),
            one("servicePeriod", "Period"),
            req("status", "code"),
            many("subject", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "Account.coverage",
        BACKBONE,
        &[
            req("coverage", "Reference"),
            one("priority", "positiveInt"),
        ],
    ),
    def(
        "Account.guarantor",
        BACKBONE,
        &[
            one("onHold", "boolean"),
            req("party", "Reference"),
            one("period", "Period"),
        ],
    ),
    // ActivityDefinition
    def(
        "ActivityDefinition",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            many("bodySite", "CodeableConcept"),
            one("code", "CodeableConcept"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            one("doNotPerform", "boolean"),
            many("dosage", "Dosage"),
            many("dynamicValue", "ActivityDefinition.dynamicValue"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            one("experimental", "boolean"),
            many("identifier", "Identifier"),
            one("intent", "code"),
            many("jurisdiction", "CodeableConcept"),
            one("kind", "code"),
            one("lastReviewDate", "date"),
            many("library", "canonical"),
            one("location", "Reference"),
            one("name", "string"),
            many("observationRequirement", "Reference"),
            many("observationResultRequirement", "Reference"),
            many("participant", "ActivityDefinition.participant"),
            one("priority", "code"),
            one("productCodeableConcept", "CodeableConcept"),
            one("productReference", "Reference"),
            one("profile", "canonical"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            one("quantity", "Quantity"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            many("specimenRequirement", "Reference"),
            req("status", "code"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            one("subtitle", "string"),
            one("timingAge", "Age"),
            one("timingDateTime", "dateTime"),
            one("timingDuration", "Duration"),
            one("timingPeriod", "Period"),
            one("timingRange", "Range"),
            one("timingTiming", "Timing"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            one("transform", "canonical"),
            one("url", "uri"),
            one("usage", "string"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "ActivityDefinition.participant",
        BACKBONE,
        &[one("role", "CodeableConcept"), req("type", "code")],
    ),
    def(
        "ActivityDefinition.dynamicValue",
        BACKBONE,
        &[req("expression", "Expression"), req("path", "string")],
    ),
    // AdverseEvent
    def(
        "AdverseEvent",
        DOMAIN,
        &[
            req("actuality", "code"),
            many("category", "CodeableConcept"),
            many("contributor", "Reference"),
            one("date", "dateTime"),
            one("detected", "dateTime"),
            one("encounter", "Reference"),
            one("event", "CodeableConcept"),
            one("identifier", "Identifier"),
            one("location", "Reference"),
            one("outcome", "CodeableConcept"),
            one("recordedDate", "dateTime"),
            one("recorder", "Reference"),
            many("referenceDocument", "Reference"),
            many("resultingCondition", "Reference"),
            one("seriousness", "CodeableConcept"),
            one("severity", "CodeableConcept"),
            many("study", "Reference"),
            req("subject", "Reference"),
            many("subjectMedicalHistory", "Reference"),
            many("suspectEntity", "AdverseEvent.suspectEntity"),
        ],
    ),
    def(
        "AdverseEvent.suspectEntity",
        BACKBONE,
        &[
            many("causality", "AdverseEvent.suspectEntity.causality"),
            req("instance", "Reference"),
        ],
    ),
    def(
        "AdverseEvent.suspectEntity.causality",
        BACKBONE,
        &[
            one("assessment", "CodeableConcept"),
            one("author", "Reference"),
            one("method", "CodeableConcept"),
            one("productRelatedness", "string"),
        ],
    ),
    // AllergyIntolerance
    def(
        "AllergyIntolerance",
        DOMAIN,
        &[
            one("asserter", "Reference"),
            many("category", "code"),
            one("clinicalStatus", "CodeableConcept"),
            one("code", "CodeableConcept"),
            one("criticality", "code"),
            one("encounter", "Reference"),
            many("identifier", "Identifier"),
            one("lastOccurrence", "dateTime"),
            many("note", "Annotation"),
            one("onsetAge", "Age"),
            one("onsetDateTime", "dateTime"),
            one("onsetPeriod", "Period"),
            one("onsetRange", "Range"),
            one("onsetString", "string"),
            req("patient", "Reference"),
            many("reaction", "AllergyIntolerance.reaction"),
            one("recordedDate", "dateTime"),
            one("recorder", "Reference"),
            one("type", "code"),
            one("verificationStatus", "CodeableConcept"),
        ],
    ),
    def(
        "AllergyIntolerance.reaction",
        BACKBONE,
        &[
            one("description", "string"),
            one("exposureRoute", "CodeableConcept"),
            req_many("manifestation", "CodeableConcept"),
            many("note", "Annotation"),
            one("onset", "dateTime"),
            one("severity", "code"),
            one("substance", "CodeableConcept"),
        ],
    ),
    // Appointment
    def(
        "Appointment",
        DOMAIN,
        &[
            one("appointmentType", "CodeableConcept"),
            many("basedOn", "Reference"),
            one("cancelationReason", "CodeableConcept"),
            one("comment", "string"),
            one("created", "dateTime"),
            one("description", "string"),
            one("end", "instant"),
            many("identifier", "Identifier"),
            one("minutesDuration", "positiveInt"),
            req_many("participant", "Appointment.participant"),
            one("patientInstruction", "string"),
            one("priority", "unsignedInt"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            many("requestedPeriod", "Period"),
            many("serviceCategory", "CodeableConcept"),
            many("serviceType", "CodeableConcept"),
            many("slot", "Reference"),
            many("specialty", "CodeableConcept"),
            one("start", "instant"),
            req("status", "code"),
            many("supportingInformation", "Reference"),
        ],
    ),
    def(
        "Appointment.participant",
        BACKBONE,
        &[
            one("actor", "Reference"),
            one("period", "Period"),
            one("required", "code"),
            req("status", "code"),
            many("type", "CodeableConcept"),
        ],
    ),
    // AppointmentResponse
    def(
        "AppointmentResponse",
        DOMAIN,
        &[
            one("actor", "Reference"),
            req("appointment", "Reference"),
            one("comment", "string"),
            one("end", "instant"),
            many("identifier", "Identifier"),
            req("participantStatus", "code"),
            many("participantType", "CodeableConcept"),
            one("start", "instant"),
        ],
    ),
    // AuditEvent
    def(
        "AuditEvent",
        DOMAIN,
        &[
            one("action", "code"),
            req_many("agent", "AuditEvent.agent"),
            many("entity", "AuditEvent.entity"),
            one("outcome", "code"),
            one("outcomeDesc", "string"),
            one("period", "Period"),
            many("purposeOfEvent", "CodeableConcept"),
            req("recorded", "instant"),
            req("source", "AuditEvent.source"),
            many("subtype", "Coding"),
            req("type", "Coding"),
        ],
    ),
    def(
        "AuditEvent.agent",
        BACKBONE,
        &[
            one("altId", "string"),
            one("location", "Reference"),
            one("media", "Coding"),
            one("name", "string"),
            one("network", "AuditEvent.agent.network"),
            many("policy", "uri"),
            many("purposeOfUse", "CodeableConcept"),
            req("requestor", "boolean"),
            many("role", "CodeableConcept"),
            one("type", "CodeableConcept"),
            one("who", "Reference"),
        ],
    ),
    def(
        "AuditEvent.agent.network",
        BACKBONE,
        &[one("address", "string"), one("type", "code")],
    ),
    def(
        "AuditEvent.source",
        BACKBONE,
        &[
            req("observer", "Reference"),
            one("site", "string"),
            many("type", "Coding"),
        ],
    ),
    def(
        "AuditEvent.entity",
        BACKBONE,
        &[
            one("description", "string"),
            many("detail", "AuditEvent.entity.detail"),
            one("lifecycle", "Coding"),
            one("name", "string"),
            one("query", "base64Binary"),
            one("role", "Coding"),
            many("securityLabel", "Coding"),
            one("type", "Coding"),
            one("what", "Reference"),
        ],
    ),
    def(
        "AuditEvent.entity.detail",
        BACKBONE,
        &[
            req("type", "string"),
            req("valueBase64Binary", "base64Binary"),
            req("valueString", "string"),
        ],
    ),
    // Basic
    def(
        "Basic",
        DOMAIN,
        &[
            one("author", "Reference"),
            req("code", "CodeableConcept"),
            one("created", "date"),
            many("identifier", "Identifier"),
            one("subject", "Reference"),
        ],
    ),
    // Binary
    def(
        "Binary",
        Some("Resource"),
        &[
            req("contentType", "code"),
            one("data", "base64Binary"),
            one("securityContext", "Reference"),
        ],
    ),
    // BiologicallyDerivedProduct
    def(
        "BiologicallyDerivedProduct",
        DOMAIN,
        &[
            one("collection", "BiologicallyDerivedProduct.collection"),
            many("identifier", "Identifier"),
            one("manipulation", "BiologicallyDerivedProduct.manipulation"),
            many("parent", "Reference"),
            many("processing", "BiologicallyDerivedProduct.processing"),
            one("productCategory", "code"),
            one("productCode", "CodeableConcept"),
            one("quantity", "integer"),
            many("request", "Reference"),
            one("status", "code"),
            many("storage", "BiologicallyDerivedProduct.storage"),
        ],
    ),
    def(
        "BiologicallyDerivedProduct.collection",
        BACKBONE,
        &[
            one("collectedDateTime", "dateTime"),
            one("collectedPeriod", "Period"),
            one("collector", "Reference"),
            one("source", "Reference"),
        ],
    ),
    def(
        "BiologicallyDerivedProduct.processing",
        BACKBONE,
        &[
            one("additive", "Reference"),
            one("description", "string"),
            one("procedure", "CodeableConcept"),
            one("timeDateTime", "dateTime"),
            one("timePeriod", "Period"),
        ],
    ),
    def(
        "BiologicallyDerivedProduct.manipulation",
        BACKBONE,
        &[
            one("description", "string"),
            one("timeDateTime", "dateTime"),
            one("timePeriod", "Period"),
        ],
    ),
    def(
        "BiologicallyDerivedProduct.storage",
        BACKBONE,
        &[
            one("description", "string"),
            one("duration", "Period"),
            one("scale", "code"),
            one("temperature", "decimal"),
        ],
    ),
    // BodyStructure
    def(
        "BodyStructure",
        DOMAIN,
        &[
            one("active", "boolean"),
            one("description", "string"),
            many("identifier", "Identifier"),
            many("image", "Attachment"),
            one("location", "CodeableConcept"),
            many("locationQualifier", "CodeableConcept"),
            one("morphology", "CodeableConcept"),
            req("patient", "Reference"),
        ],
    ),
    // Bundle
    def(
        "Bundle",
        Some("Resource"),
        &[
            many("entry", "Bundle.entry"),
            one("identifier", "Identifier"),
            many("link", "Bundle.link"),
            one("signature", "Signature"),
            one("timestamp", "instant"),
            one("total", "unsignedInt"),
            req("type", "code"),
        ],
    ),
    def(
        "Bundle.link",
        BACKBONE,
        &[req("relation", "string"), req("url", "uri")],
    ),
    def(
        "Bundle.entry",
        BACKBONE,
        &[
            one("fullUrl", "uri"),
            many("link", "Bundle.link"),
            one("request", "Bundle.entry.request"),
            one("resource", "Resource"),
            one("response", "Bundle.entry.response"),
            one("search", "Bundle.entry.search"),
        ],
    ),
    def(
        "Bundle.entry.search",
        BACKBONE,
        &[one("mode", "code"), one("score", "decimal")],
    ),
    def(
        "Bundle.entry.request",
        BACKBONE,
        &[
            one("ifMatch", "string"),
            one("ifModifiedSince", "instant"),
            one("ifNoneExist", "string"),
            one("ifNoneMatch", "string"),
            req("method", "code"),
            req("url", "uri"),
        ],
    ),
    def(
        "Bundle.entry.response",
        BACKBONE,
        &[
            one("etag", "string"),
            one("lastModified", "instant"),
            one("location", "uri"),
            one("outcome", "Resource"),
            req("status", "string"),
        ],
    ),
    // CapabilityStatement
    def(
        "CapabilityStatement",
        DOMAIN,
        &[
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            req("date", "dateTime"),
            one("description", "markdown"),
            many("document", "CapabilityStatement.document"),
            one("experimental", "boolean"),
            req("fhirVersion", "code"),
            req_many("format", "code"),
            one("implementation", "CapabilityStatement.implementation"),
            many("implementationGuide", "canonical"),
            many("imports", "canonical"),
            many("instantiates", "canonical"),
            many("jurisdiction", "CodeableConcept"),
            req("kind", "code"),
            many("messaging", "CapabilityStatement.messaging"),
            one("name", "string"),
            many("patchFormat", "code"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("rest", "CapabilityStatement.rest"),
            one("software", "CapabilityStatement.software"),
            req("status", "code"),
            one("title", "string"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "CapabilityStatement.software",
        BACKBONE,
        &[
            req("name", "string"),
            one("releaseDate", "dateTime"),
            one("version", "string"),
        ],
    ),
    def(
        "CapabilityStatement.implementation",
        BACKBONE,
        &[
            one("custodian", "Reference"),
            req("description", "string"),
            one("url", "url"),
        ],
    ),
    def(
        "CapabilityStatement.rest",
        BACKBONE,
        &[
            many("compartment", "canonical"),
            one("documentation", "markdown"),
            many("interaction", "CapabilityStatement.rest.interaction"),
            req("mode", "code"),
            many("operation", "CapabilityStatement.rest.resource.operation"),
            many("resource", "CapabilityStatement.rest.resource"),
            many("searchParam", "CapabilityStatement.rest.resource.searchParam"),
            one("security", "CapabilityStatement.rest.security"),
        ],
    ),
    def(
        "CapabilityStatement.rest.security",
        BACKBONE,
        &[
            one("cors", "boolean"),
            one("description", "markdown"),
            many("service", "CodeableConcept"),
        ],
    ),
    def(
        "CapabilityStatement.rest.resource",
        BACKBONE,
        &[
            one("conditionalCreate", "boolean"),
            one("conditionalDelete", "code"),
            one("conditionalRead", "code"),
            one("conditionalUpdate", "boolean"),
            one("documentation", "markdown"),
            many("interaction", "CapabilityStatement.rest.resource.interaction"),
            many("operation", "CapabilityStatement.rest.resource.operation"),
            one("profile", "canonical"),
            one("readHistory", "boolean"),
            many("referencePolicy", "code"),
            many("searchInclude", "string"),
            many("searchParam", "CapabilityStatement.rest.resource.searchParam"),
            many("searchRevInclude", "string"),
            many("supportedProfile", "canonical"),
            req("type", "code"),
            one("updateCreate", "boolean"),
            one("versioning", "code"),
        ],
    ),
    def(
        "CapabilityStatement.rest.resource.interaction",
        BACKBONE,
        &[req("code", "code"), one("documentation", "markdown")],
    ),
    def(
        "CapabilityStatement.rest.resource.searchParam",
        BACKBONE,
        &[
            one("definition", "canonical"),
            one("documentation", "markdown"),
            req("name", "string"),
            req("type", "code"),
        ],
    ),
    def(
        "CapabilityStatement.rest.resource.operation",
        BACKBONE,
        &[
            req("definition", "canonical"),
            one("documentation", "markdown"),
            req("name", "string"),
        ],
    ),
    def(
        "CapabilityStatement.rest.interaction",
        BACKBONE,
        &[req("code", "code"), one("documentation", "markdown")],
    ),
    def(
        "CapabilityStatement.messaging",
        BACKBONE,
        &[
            one("documentation", "markdown"),
            many("endpoint", "CapabilityStatement.messaging.endpoint"),
            one("reliableCache", "unsignedInt"),
            many("supportedMessage", "CapabilityStatement.messaging.supportedMessage"),
        ],
    ),
    def(
        "CapabilityStatement.messaging.endpoint",
        BACKBONE,
        &[req("address", "url"), req("protocol", "Coding")],
    ),
    def(
        "CapabilityStatement.messaging.supportedMessage",
        BACKBONE,
        &[req("definition", "canonical"), req("mode", "code")],
    ),
    def(
        "CapabilityStatement.document",
        BACKBONE,
        &[
            one("documentation", "markdown"),
            req("mode", "code"),
            req("profile", "canonical"),
        ],
    ),
    // CarePlan
    def(
        "CarePlan",
        DOMAIN,
        &[
            many("activity", "CarePlan.activity"),
            many("addresses", "Reference"),
            one("author", "Reference"),
            many("basedOn", "Reference"),
            many("careTeam", "Reference"),
            many("category", "CodeableConcept"),
            many("contributor", "Reference"),
            one("created", "dateTime"),
            one("description", "string"),
            one("encounter", "Reference"),
            many("goal", "Reference"),
            many("identifier", "Identifier"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            req("intent", "code"),
            many("note", "Annotation"),
            many("partOf", "Reference"),
            one("period", "Period"),
            many("replaces", "Reference"),
            req("status", "code"),
            req("subject", "Reference"),
            many("supportingInfo", "Reference"),
            one("title", "string"),
        ],
    ),
    def(
        "CarePlan.activity",
        BACKBONE,
        &[
            one("detail", "CarePlan.activity.detail"),
            many("outcomeCodeableConcept", "CodeableConcept"),
            many("outcomeReference", "Reference"),
            many("progress", "Annotation"),
            one("reference", "Reference"),
        ],
    ),
    def(
        "CarePlan.activity.detail",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("dailyAmount", "Quantity"),
            one("description", "string"),
            one("doNotPerform", "boolean"),
            many("goal", "Reference"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            one("kind", "code"),
            one("location", "Reference"),
            many("performer", "Reference"),
            one("productCodeableConcept", "CodeableConcept"),
            one("productReference", "Reference"),
            one("quantity", "Quantity"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("scheduledPeriod", "Period"),
            one("scheduledString", "string"),
            one("scheduledTiming", "Timing"),
            req("status", "code"),
            one("statusReason", "CodeableConcept"),
        ],
    ),
    // CareTeam
    def(
        "CareTeam",
        DOMAIN,
        &[
            many("category", "CodeableConcept"),
            one("encounter", "Reference"),
            many("identifier", "Identifier"),
            many("managingOrganization", "Reference"),
            one("name", "string"),
            many("note", "Annotation"),
            many("participant", "CareTeam.participant"),
            one("period", "Period"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("status", "code"),
            one("subject", "Reference"),
            many("telecom", "ContactPoint"),
        ],
    ),
    def(
        "CareTeam.participant",
        BACKBONE,
        &[
            one("member", "Reference"),
            one("onBehalfOf", "Reference"),
            one("period", "Period"),
            many("role", "CodeableConcept"),
        ],
    ),
    // CatalogEntry
    def(
        "CatalogEntry",
        DOMAIN,
        &[
            many("additionalCharacteristic", "CodeableConcept"),
            many("additionalClassification", "CodeableConcept"),
            many("additionalIdentifier", "Identifier"),
            many("classification", "CodeableConcept"),
            many("identifier", "Identifier"),
            one("lastUpdated", "dateTime"),
            req("orderable", "boolean"),
            req("referencedItem", "Reference"),
            many("relatedEntry", "CatalogEntry.relatedEntry"),
            one("status", "code"),
            one("type", "CodeableConcept"),
            one("validTo", "dateTime"),
            one("validityPeriod", "Period"),
        ],
    ),
    def(
        "CatalogEntry.relatedEntry",
        BACKBONE,
        &[req("item", "Reference"), req("relationtype", "code")],
    ),
    // ChargeItem
    def(
        "ChargeItem",
        DOMAIN,
        &[
            many("account", "Reference"),
            many("bodysite", "CodeableConcept"),
            req("code", "CodeableConcept"),
            one("context", "Reference"),
            one("costCenter", "Reference"),
            many("definitionCanonical", "canonical"),
            many("definitionUri", "uri"),
            one("enteredDate", "dateTime"),
            one("enterer", "Reference"),
            one("factorOverride", "decimal"),
            many("identifier", "Identifier"),
            many("note", "Annotation"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrencePeriod", "Period"),
            one("occurrenceTiming", "Timing"),
            one("overrideReason", "string"),
            many("partOf", "Reference"),
            many("performer", "ChargeItem.performer"),
            one("performingOrganization", "Reference"),
            one("priceOverride", "Money"),
            one("productCodeableConcept", "CodeableConcept"),
            one("productReference", "Reference"),
            one("quantity", "Quantity"),
            many("reason", "CodeableConcept"),
            one("requestingOrganization", "Reference"),
            many("service", "Reference"),
            req("status", "code"),
            req("subject", "Reference"),
            many("supportingInformation", "Reference"),
        ],
    ),
    def(
        "ChargeItem.performer",
        BACKBONE,
        &[
            req("actor", "Reference"),
            one("function", "CodeableConcept"),
        ],
    ),
    // ChargeItemDefinition
    def(
        "ChargeItemDefinition",
        DOMAIN,
        &[
            many("applicability", "ChargeItemDefinition.applicability"),
            one("approvalDate", "date"),
            one("code", "CodeableConcept"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            many("derivedFromUri", "uri"),
            one("description", "markdown"),
            one("effectivePeriod", "Period"),
            one("experimental", "boolean"),
            many("identifier", "Identifier"),
            many("instance", "Reference"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            many("partOf", "canonical"),
            many("propertyGroup", "ChargeItemDefinition.propertyGroup"),
            one("publisher", "string"),
            many("replaces", "canonical"),
            req("status", "code"),
            one("title", "string"),
            req("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "ChargeItemDefinition.applicability",
        BACKBONE,
        &[
            one("description", "string"),
            one("expression", "string"),
            one("language", "string"),
        ],
    ),
    def(
        "ChargeItemDefinition.propertyGroup",
        BACKBONE,
        &[
            many("applicability", "ChargeItemDefinition.applicability"),
            many("priceComponent", "ChargeItemDefinition.propertyGroup.priceComponent"),
        ],
    ),
    def(
        "ChargeItemDefinition.propertyGroup.priceComponent",
        BACKBONE,
        &[
            one("amount", "Money"),
            one("code", "CodeableConcept"),
            one("factor", "decimal"),
            req("type", "code"),
        ],
    ),
    // Claim
    def(
        "Claim",
        DOMAIN,
        &[
            one("accident", "Claim.accident"),
            one("billablePeriod", "Period"),
            many("careTeam", "Claim.careTeam"),
            req("created", "dateTime"),
            many("diagnosis", "Claim.diagnosis"),
            one("enterer", "Reference"),
            one("facility", "Reference"),
            one("fundsReserve", "CodeableConcept"),
            many("identifier", "Identifier"),
            req_many("insurance", "Claim.insurance"),
            one("insurer", "Reference"),
            many("item", "Claim.item"),
            one("originalPrescription", "Reference"),
            req("patient", "Reference"),
            one("payee", "Claim.payee"),
            one("prescription", "Reference"),
            req("priority", "CodeableConcept"),
            many("procedure", "Claim.procedure"),
            req("provider", "Reference"),
            one("referral", "Reference"),
            many("related", "Claim.related"),
            req("status", "code"),
            one("subType", "CodeableConcept"),
            many("supportingInfo", "Claim.supportingInfo"),
            one("total", "Money"),
            req("type", "CodeableConcept"),
            req("use", "code"),
        ],
    ),
    def(
        "Claim.related",
        BACKBONE,
        &[
            one("claim", "Reference"),
            one("reference", "Identifier"),
            one("relationship", "CodeableConcept"),
        ],
    ),
    def(
        "Claim.payee",
        BACKBONE,
        &[one("party", "Reference"), req("type", "CodeableConcept")],
    ),
    def(
        "Claim.careTeam",
        BACKBONE,
        &[
            req("provider", "Reference"),
            one("qualification", "CodeableConcept"),
            one("responsible", "boolean"),
            one("role", "CodeableConcept"),
            req("sequence", "positiveInt"),
        ],
    ),
    def(
        "Claim.supportingInfo",
        BACKBONE,
        &[
            req("category", "CodeableConcept"),
            one("code", "CodeableConcept"),
            one("reason", "CodeableConcept"),
            req("sequence", "positiveInt"),
            one("timingDate", "date"),
            one("timingPeriod", "Period"),
            one("valueAttachment", "Attachment"),
            one("valueBoolean", "boolean"),
            one("valueQuantity", "Quantity"),
            one("valueReference", "Reference"),
            one("valueString", "string"),
        ],
    ),
    def(
        "Claim.diagnosis",
        BACKBONE,
        &[
            req("diagnosisCodeableConcept", "CodeableConcept"),
            req("diagnosisReference", "Reference"),
            one("onAdmission", "CodeableConcept"),
            one("packageCode", "CodeableConcept"),
            req("sequence", "positiveInt"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "Claim.procedure",
        BACKBONE,
        &[
            one("date", "dateTime"),
            req("procedureCodeableConcept", "CodeableConcept"),
            req("procedureReference", "Reference"),
            req("sequence", "positiveInt"),
            many("type", "CodeableConcept"),
            many("udi", "Reference"),
        ],
    ),
    def(
        "Claim.insurance",
        BACKBONE,
        &[
            one("businessArrangement", "string"),
            one("claimResponse", "Reference"),
            req("coverage", "Reference"),
            req("focal", "boolean"),
            one("identifier", "Identifier"),
            many("preAuthRef", "string"),
            req("sequence", "positiveInt"),
        ],
    ),
    def(
        "Claim.accident",
        BACKBONE,
        &[
            req("date", "date"),
            one("locationAddress", "Address"),
            one("locationReference", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "Claim.item",
        BACKBONE,
        &[
            one("bodySite", "CodeableConcept"),
            many("careTeamSequence", "positiveInt"),
            one("category", "CodeableConcept"),
            many("detail", "Claim.item.detail"),
            many("diagnosisSequence", "positiveInt"),
            many("encounter", "Reference"),
            one("factor", "decimal"),
            many("informationSequence", "positiveInt"),
            one("locationAddress", "Address"),
            one("locationCodeableConcept", "CodeableConcept"),
            one("locationReference", "Reference"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("procedureSequence", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            many("programCode", "CodeableConcept"),
            one("quantity", "Quantity"),
            one("revenue", "CodeableConcept"),
            req("sequence", "positiveInt"),
            one("servicedDate", "date"),
            one("servicedPeriod", "Period"),
            many("subSite", "CodeableConcept"),
            many("udi", "Reference"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "Claim.item.detail",
        BACKBONE,
        &[
            one("category", "CodeableConcept"),
            one("factor", "decimal"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            req("productOrService", "CodeableConcept"),
            many("programCode", "CodeableConcept"),
            one("quantity", "Quantity"),
            one("revenue", "CodeableConcept"),
            req("sequence", "positiveInt"),
            many("subDetail", "Claim.item.detail.subDetail"),
            many("udi", "Reference"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "Claim.item.detail.subDetail",
        BACKBONE,
        &[
            one("category", "CodeableConcept"),
            one("factor", "decimal"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            req("productOrService", "CodeableConcept"),
            many("programCode", "CodeableConcept"),
            one("quantity", "Quantity"),
            one("revenue", "CodeableConcept"),
            req("sequence", "positiveInt"),
            many("udi", "Reference"),
            one("unitPrice", "Money"),
        ],
    ),
    // ClaimResponse
    def(
        "ClaimResponse",
        DOMAIN,
        &[
            many("addItem", "ClaimResponse.addItem"),
            many("adjudication", "ClaimResponse.item.adjudication"),
            many("communicationRequest", "Reference"),
            req("created", "dateTime"),
            one("disposition", "string"),
            many("error", "ClaimResponse.error"),
            one("form", "Attachment"),
            one("formCode", "CodeableConcept"),
            one("fundsReserve", "CodeableConcept"),
            many("identifier", "Identifier"),
            many("insurance", "ClaimResponse.insurance"),
            req("insurer", "Reference"),
            many("item", "ClaimResponse.item"),
            req("outcome", "code"),
            req("patient", "Reference"),
            one("payeeType", "CodeableConcept"),
            one("payment", "ClaimResponse.payment"),
            one("preAuthPeriod", "Period"),
            one("preAuthRef", "string"),
            many("processNote", "ClaimResponse.processNote"),
            one("request", "Reference"),
            one("requestor", "Reference"),
            req("status", "code"),
            one("subType", "CodeableConcept"),
            many("total", "ClaimResponse.total"),
            req("type", "CodeableConcept"),
            req("use", "code"),
        ],
    ),
    def(
        "ClaimResponse.item",
        BACKBONE,
        &[
            req_many("adjudication", "ClaimResponse.item.adjudication"),
            many("detail", "ClaimResponse.item.detail"),
            req("itemSequence", "positiveInt"),
            many("noteNumber", "positiveInt"),
        ],
    ),
    def(
        "ClaimResponse.item.adjudication",
        BACKBONE,
        &[
            one("amount", "Money"),
            req("category", "CodeableConcept"),
            one("reason", "CodeableConcept"),
            one("value", "decimal"),
        ],
    ),
    def(
        "ClaimResponse.item.detail",
        BACKBONE,
        &[
            req_many("adjudication", "ClaimResponse.item.adjudication"),
            req("detailSequence", "positiveInt"),
            many("noteNumber", "positiveInt"),
            many("subDetail", "ClaimResponse.item.detail.subDetail"),
        ],
    ),
    def(
        "ClaimResponse.item.detail.subDetail",
        BACKBONE,
        &[
            many("adjudication", "ClaimResponse.item.adjudication"),
            many("noteNumber", "positiveInt"),
            req("subDetailSequence", "positiveInt"),
        ],
    ),
    def(
        "ClaimResponse.addItem",
        BACKBONE,
        &[
            req_many("adjudication", "ClaimResponse.item.adjudication"),
            one("bodySite", "CodeableConcept"),
            many("detail", "ClaimResponse.addItem.detail"),
            many("detailSequence", "positiveInt"),
            one("factor", "decimal"),
            many("itemSequence", "positiveInt"),
            one("locationAddress", "Address"),
            one("locationCodeableConcept", "CodeableConcept"),
            one("locationReference", "Reference"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            many("programCode", "CodeableConcept"),
            many("provider", "Reference"),
            one("quantity", "Quantity"),
            one("servicedDate", "date"),
            one("servicedPeriod", "Period"),
            many("subSite", "CodeableConcept"),
            many("subdetailSequence", "positiveInt"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ClaimResponse.addItem.detail",
        BACKBONE,
        &[
            req_many("adjudication", "ClaimResponse.item.adjudication"),
            one("factor", "decimal"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            one("quantity", "Quantity"),
            many("subDetail", "ClaimResponse.addItem.detail.subDetail"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ClaimResponse.addItem.detail.subDetail",
        BACKBONE,
        &[
            req_many("adjudication", "ClaimResponse.item.adjudication"),
            one("factor", "decimal"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            one("quantity", "Quantity"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ClaimResponse.total",
        BACKBONE,
        &[
            req("amount", "Money"),
            req("category", "CodeableConcept"),
        ],
    ),
    def(
        "ClaimResponse.payment",
        BACKBONE,
        &[
            one("adjustment", "Money"),
            one("adjustmentReason", "CodeableConcept"),
            req("amount", "Money"),
            one("date", "date"),
            one("identifier", "Identifier"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "ClaimResponse.processNote",
        BACKBONE,
        &[
            one("language", "CodeableConcept"),
            one("number", "positiveInt"),
            req("text", "string"),
            one("type", "code"),
        ],
    ),
    def(
        "ClaimResponse.insurance",
        BACKBONE,
        &[
            one("businessArrangement", "string"),
            one("claimResponse", "Reference"),
            req("coverage", "Reference"),
            req("focal", "boolean"),
            req("sequence", "positiveInt"),
        ],
    ),
    def(
        "ClaimResponse.error",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            one("detailSequence", "positiveInt"),
            one("itemSequence", "positiveInt"),
            one("subDetailSequence", "positiveInt"),
        ],
    ),
    // ClinicalImpression
    def(
        "ClinicalImpression",
        DOMAIN,
        &[
            one("assessor", "Reference"),
            one("code", "CodeableConcept"),
            one("date", "dateTime"),
            one("description", "string"),
            one("effectiveDateTime", "dateTime"),
            one("effectivePeriod", "Period"),
            one("encounter", "Reference"),
            many("finding", "ClinicalImpression.finding"),
            many("identifier", "Identifier"),
            many("investigation", "ClinicalImpression.investigation"),
            many("note", "Annotation"),
            one("previous", "Reference"),
            many("problem", "Reference"),
            many("prognosisCodeableConcept", "CodeableConcept"),
            many("prognosisReference", "Reference"),
            many("protocol", "uri"),
            req("status", "code"),
            one("statusReason", "CodeableConcept"),
            req("subject", "Reference"),
            one("summary", "string"),
            many("supportingInfo", "Reference"),
        ],
    ),
    def(
        "ClinicalImpression.investigation",
        BACKBONE,
        &[req("code", "CodeableConcept"), many("item", "Reference")],
    ),
    def(
        "ClinicalImpression.finding",
        BACKBONE,
        &[
            one("basis", "string"),
            one("itemCodeableConcept", "CodeableConcept"),
            one("itemReference", "Reference"),
        ],
    ),
    // CodeSystem
    def(
        "CodeSystem",
        DOMAIN,
        &[
            one("caseSensitive", "boolean"),
            one("compositional", "boolean"),
            many("concept", "CodeSystem.concept"),
            many("contact", "ContactDetail"),
            req("content", "code"),
            one("copyright", "markdown"),
            one("count", "unsignedInt"),
            one("date", "dateTime"),
            one("description", "markdown"),
            one("experimental", "boolean"),
            many("filter", "CodeSystem.filter"),
            one("hierarchyMeaning", "code"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("name", "string"),
            many("property", "CodeSystem.property"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            req("status", "code"),
            one("supplements", "canonical"),
            one("title", "string"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("valueSet", "canonical"),
            one("version", "string"),
            one("versionNeeded", "boolean"),
        ],
    ),
    def(
        "CodeSystem.filter",
        BACKBONE,
        &[
            req("code", "code"),
            one("description", "string"),
            req_many("operator", "code"),
            req("value", "string"),
        ],
    ),
    def(
        "CodeSystem.property",
        BACKBONE,
        &[
            req("code", "code"),
            one("description", "string"),
            req("type", "code"),
            one("uri", "uri"),
        ],
    ),
    def(
        "CodeSystem.concept",
        BACKBONE,
        &[
            req("code", "code"),
            many("concept", "CodeSystem.concept"),
            one("definition", "string"),
            many("designation", "CodeSystem.concept.designation"),
            one("display", "string"),
            many("property", "CodeSystem.concept.property"),
        ],
    ),
    def(
        "CodeSystem.concept.designation",
        BACKBONE,
        &[
            one("language", "code"),
            one("use", "Coding"),
            req("value", "string"),
        ],
    ),
    def(
        "CodeSystem.concept.property",
        BACKBONE,
        &[
            req("code", "code"),
            req("valueBoolean", "boolean"),
            req("valueCode", "code"),
            req("valueCoding", "Coding"),
            req("valueDateTime", "dateTime"),
            req("valueDecimal", "decimal"),
            req("valueInteger", "integer"),
            req("valueString", "string"),
        ],
    ),
    // Communication
    def(
        "Communication",
        DOMAIN,
        &[
            many("about", "Reference"),
            many("basedOn", "Reference"),
            many("category", "CodeableConcept"),
            one("encounter", "Reference"),
            many("identifier", "Identifier"),
            many("inResponseTo", "Reference"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            many("medium", "CodeableConcept"),
            many("note", "Annotation"),
            many("partOf", "Reference"),
            many("payload", "Communication.payload"),
            one("priority", "code"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("received", "dateTime"),
            many("recipient", "Reference"),
            one("sender", "Reference"),
            one("sent", "dateTime"),
            req("status", "code"),
            one("statusReason", "CodeableConcept"),
            one("subject", "Reference"),
            one("topic", "CodeableConcept"),
        ],
    ),
    def(
        "Communication.payload",
        BACKBONE,
        &[
            req("contentAttachment", "Attachment"),
            req("contentReference", "Reference"),
            req("contentString", "string"),
        ],
    ),
    // CommunicationRequest
    def(
        "CommunicationRequest",
        DOMAIN,
        &[
            many("about", "Reference"),
            one("authoredOn", "dateTime"),
            many("basedOn", "Reference"),
            many("category", "CodeableConcept"),
            one("doNotPerform", "boolean"),
            one("encounter", "Reference"),
            one("groupIdentifier", "Identifier"),
            many("identifier", "Identifier"),
            many("medium", "CodeableConcept"),
            many("note", "Annotation"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrencePeriod", "Period"),
            many("payload", "CommunicationRequest.payload"),
            one("priority", "code"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            many("recipient", "Reference"),
            many("replaces", "Reference"),
            one("requester", "Reference"),
            one("sender", "Reference"),
            req("status", "code"),
            one("statusReason", "CodeableConcept"),
            one("subject", "Reference"),
        ],
    ),
    def(
        "CommunicationRequest.payload",
        BACKBONE,
        &[
            req("contentAttachment", "Attachment"),
            req("contentReference", "Reference"),
            req("contentString", "string"),
        ],
    ),
    // CompartmentDefinition
    def(
        "CompartmentDefinition",
        DOMAIN,
        &[
            req("code", "code"),
            many("contact", "ContactDetail"),
            one("date", "dateTime"),
            one("description", "markdown"),
            one("experimental", "boolean"),
            req("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("resource", "CompartmentDefinition.resource"),
            req("search", "boolean"),
            req("status", "code"),
            req("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "CompartmentDefinition.resource",
        BACKBONE,
        &[
            req("code", "code"),
            one("documentation", "string"),
            many("param", "string"),
        ],
    ),
    // Composition
    def(
        "Composition",
        DOMAIN,
        &[
            many("attester", "Composition.attester"),
            req_many("author", "Reference"),
            many("category", "CodeableConcept"),
            one("confidentiality", "code"),
            one("custodian", "Reference"),
            req("date", "dateTime"),
            one("encounter", "Reference"),
            many("event", "Composition.event"),
            one("identifier", "Identifier"),
            many("relatesTo", "Composition.relatesTo"),
            many("section", "Composition.section"),
            req("status", "code"),
            one("subject", "Reference"),
            req("title", "string"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "Composition.attester",
        BACKBONE,
        &[
            req("mode", "code"),
            one("party", "Reference"),
            one("time", "dateTime"),
        ],
    ),
    def(
        "Composition.relatesTo",
        BACKBONE,
        &[
            req("code", "code"),
            req("targetIdentifier", "Identifier"),
            req("targetReference", "Reference"),
        ],
    ),
    def(
        "Composition.event",
        BACKBONE,
        &[
            many("code", "CodeableConcept"),
            many("detail", "Reference"),
            one("period", "Period"),
        ],
    ),
    def(
        "Composition.section",
        BACKBONE,
        &[
            many("author", "Reference"),
            one("code", "CodeableConcept"),
            one("emptyReason", "CodeableConcept"),
            many("entry", "Reference"),
            one("focus", "Reference"),
            one("mode", "code"),
            one("orderedBy", "CodeableConcept"),
            many("section", "Composition.section"),
            one("text", "Narrative"),
            one("title", "string"),
        ],
    ),
    // ConceptMap
    def(
        "ConceptMap",
        DOMAIN,
        &[
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            one("experimental", "boolean"),
            many("group", "ConceptMap.group"),
            one("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            one("sourceCanonical", "canonical"),
            one("sourceUri", "uri"),
            req("status", "code"),
            one("targetCanonical", "canonical"),
            one("targetUri", "uri"),
            one("title", "string"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "ConceptMap.group",
        BACKBONE,
        &[
            req_many("element", "ConceptMap.group.element"),
            one("source", "uri"),
            one("sourceVersion", "string"),
            one("target", "uri"),
            one("targetVersion", "string"),
            one("unmapped", "ConceptMap.group.unmapped"),
        ],
    ),
    def(
        "ConceptMap.group.element",
        BACKBONE,
        &[
            one("code", "code"),
            one("display", "string"),
            many("target", "ConceptMap.group.element.target"),
        ],
    ),
    def(
        "ConceptMap.group.element.target",
        BACKBONE,
        &[
            one("code", "code"),
            one("comment", "string"),
            many("dependsOn", "ConceptMap.group.element.target.dependsOn"),
            one("display", "string"),
            req("equivalence", "code"),
            many("product", "ConceptMap.group.element.target.dependsOn"),
        ],
    ),
    def(
        "ConceptMap.group.element.target.dependsOn",
        BACKBONE,
        &[
            one("display", "string"),
            req("property", "uri"),
            one("system", "canonical"),
            req("value", "string"),
        ],
    ),
    def(
        "ConceptMap.group.unmapped",
        BACKBONE,
        &[
            one("code", "code"),
            one("display", "string"),
            req("mode", "code"),
            one("url", "canonical"),
        ],
    ),
    // Condition
    def(
        "Condition",
        DOMAIN,
        &[
            one("abatementAge", "Age"),
            one("abatementDateTime", "dateTime"),
            one("abatementPeriod", "Period"),
            one("abatementRange", "Range"),
            one("abatementString", "string"),
            one("asserter", "Reference"),
            many("bodySite", "CodeableConcept"),
            many("category", "CodeableConcept"),
            one("clinicalStatus", "CodeableConcept"),
            one("code", "CodeableConcept"),
            one("encounter", "Reference"),
            many("evidence", "Condition.evidence"),
            many("identifier", "Identifier"),
            many("note", "Annotation"),
            one("onsetAge", "Age"),
            one("onsetDateTime", "dateTime"),
            one("onsetPeriod", "Period"),
            one("onsetRange", "Range"),
            one("onsetString", "string"),
            one("recordedDate", "dateTime"),
            one("recorder", "Reference"),
            one("severity", "CodeableConcept"),
            many("stage", "Condition.stage"),
            req("subject", "Reference"),
            one("verificationStatus", "CodeableConcept"),
        ],
    ),
    def(
        "Condition.evidence",
        BACKBONE,
        &[
            many("code", "CodeableConcept"),
            many("detail", "Reference"),
        ],
    ),
    def(
        "Condition.stage",
        BACKBONE,
        &[
            many("assessment", "Reference"),
            one("summary", "CodeableConcept"),
            one("type", "CodeableConcept"),
        ],
    ),
    // Consent
    def(
        "Consent",
        DOMAIN,
        &[
            req_many("category", "CodeableConcept"),
            one("dateTime", "dateTime"),
            many("identifier", "Identifier"),
            many("organization", "Reference"),
            one("patient", "Reference"),
            many("performer", "Reference"),
            many("policy", "Consent.policy"),
            one("policyRule", "CodeableConcept"),
            one("provision", "Consent.provision"),
            req("scope", "CodeableConcept"),
            one("sourceAttachment", "Attachment"),
            one("sourceReference", "Reference"),
            req("status", "code"),
            many("verification", "Consent.verification"),
        ],
    ),
    def(
        "Consent.policy",
        BACKBONE,
        &[one("authority", "uri"), one("uri", "uri")],
    ),
    def(
        "Consent.verification",
        BACKBONE,
        &[
            one("verificationDate", "dateTime"),
            req("verified", "boolean"),
            one("verifiedWith", "Reference"),
        ],
    ),
    def(
        "Consent.provision",
        BACKBONE,
        &[
            many("action", "CodeableConcept"),
            many("actor", "Consent.provision.actor"),
            many("class", "Coding"),
            many("code", "CodeableConcept"),
            many("data", "Consent.provision.data"),
            one("dataPeriod", "Period"),
            one("period", "Period"),
            many("provision", "Consent.provision"),
            many("purpose", "Coding"),
            many("securityLabel", "Coding"),
            one("type", "code"),
        ],
    ),
    def(
        "Consent.provision.actor",
        BACKBONE,
        &[
            req("reference", "Reference"),
            req("role", "CodeableConcept"),
        ],
    ),
    def(
        "Consent.provision.data",
        BACKBONE,
        &[req("meaning", "code"), req("reference", "Reference")],
    ),
    // Contract
    def(
        "Contract",
        DOMAIN,
        &[
            many("alias", "string"),
            one("applies", "Period"),
            one("author", "Reference"),
            many("authority", "Reference"),
            one("contentDefinition", "Contract.contentDefinition"),
            one("contentDerivative", "CodeableConcept"),
            many("domain", "Reference"),
            one("expirationType", "CodeableConcept"),
            many("friendly", "Contract.friendly"),
            many("identifier", "Identifier"),
            one("instantiatesCanonical", "Reference"),
            one("instantiatesUri", "uri"),
            one("issued", "dateTime"),
            many("legal", "Contract.legal"),
            one("legalState", "CodeableConcept"),
            one("legallyBindingAttachment", "Attachment"),
            one("legallyBindingReference", "Reference"),
            one("name", "string"),
            many("relevantHistory", "Reference"),
            many("rule", "Contract.rule"),
            one("scope", "CodeableConcept"),
            many("signer", "Contract.signer"),
            many("site", "Reference"),
            one("status", "code"),
            many("subType", "CodeableConcept"),
            many("subject", "Reference"),
            one("subtitle", "string"),
            many("supportingInfo", "Reference"),
            many("term", "Contract.term"),
            one("title", "string"),
            one("topicCodeableConcept", "CodeableConcept"),
            one("topicReference", "Reference"),
            one("type", "CodeableConcept"),
            one("url", "uri"),
            one("version", "string"),
        ],
    ),
    def(
        "Contract.contentDefinition",
        BACKBONE,
        &[
            one("copyright", "markdown"),
            one("publicationDate", "dateTime"),
            req("publicationStatus", "code"),
            one("publisher", "Reference"),
            one("subType", "CodeableConcept"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "Contract.term",
        BACKBONE,
        &[
            many("action", "Contract.term.action"),
            one("applies", "Period"),
            many("asset", "Contract.term.asset"),
            many("group", "Contract.term"),
            one("identifier", "Identifier"),
            one("issued", "dateTime"),
            req("offer", "Contract.term.offer"),
            many("securityLabel", "Contract.term.securityLabel"),
            one("subType", "CodeableConcept"),
            one("text", "string"),
            one("topicCodeableConcept", "CodeableConcept"),
            one("topicReference", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "Contract.term.securityLabel",
        BACKBONE,
        &[
            many("category", "Coding"),
            req("classification", "Coding"),
            many("control", "Coding"),
            many("number", "unsignedInt"),
        ],
    ),
    def(
        "Contract.term.offer",
        BACKBONE,
        &[
            many("answer", "Contract.term.offer.answer"),
            one("decision", "CodeableConcept"),
            many("decisionMode", "CodeableConcept"),
            many("identifier", "Identifier"),
            many("linkId", "string"),
            many("party", "Contract.term.offer.party"),
            many("securityLabelNumber", "unsignedInt"),
            one("text", "string"),
            one("topic", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "Contract.term.offer.party",
        BACKBONE,
        &[
            req_many("reference", "Reference"),
            req("role", "CodeableConcept"),
        ],
    ),
    def(
        "Contract.term.offer.answer",
        BACKBONE,
        &[
            req("valueAttachment", "Attachment"),
            req("valueBoolean", "boolean"),
            req("valueCoding", "Coding"),
            req("valueDate", "date"),
            req("valueDateTime", "dateTime"),
            req("valueDecimal", "decimal"),
            req("valueInteger", "integer"),
            req("valueQuantity", "Quantity"),
            req("valueReference", "Reference"),
            req("valueString", "string"),
            req("valueTime", "time"),
            req("valueUri", "uri"),
        ],
    ),
    def(
        "Contract.term.asset",
        BACKBONE,
        &[
            many("answer", "Contract.term.offer.answer"),
            one("condition", "string"),
            many("context", "Contract.term.asset.context"),
            many("linkId", "string"),
            many("period", "Period"),
            many("periodType", "CodeableConcept"),
            one("relationship", "Coding"),
            one("scope", "CodeableConcept"),
            many("securityLabelNumber", "unsignedInt"),
            many("subtype", "CodeableConcept"),
            one("text", "string"),
            many("type", "CodeableConcept"),
            many("typeReference", "Reference"),
            many("usePeriod", "Period"),
            many("valuedItem", "Contract.term.asset.valuedItem"),
        ],
    ),
    def(
        "Contract.term.asset.context",
        BACKBONE,
        &[
            many("code", "CodeableConcept"),
            one("reference", "Reference"),
            one("text", "string"),
        ],
    ),
    def(
        "Contract.term.asset.valuedItem",
        BACKBONE,
        &[
            one("effectiveTime", "dateTime"),
            one("entityCodeableConcept", "CodeableConcept"),
            one("entityReference", "Reference"),
            one("factor", "decimal"),
            one("identifier", "Identifier"),
            many("linkId", "string"),
            one("net", "Money"),
            one("payment", "string"),
            one("paymentDate", "dateTime"),
            one("points", "decimal"),
            one("quantity", "Quantity"),
            one("recipient", "Reference"),
            one("responsible", "Reference"),
            many("securityLabelNumber", "unsignedInt"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "Contract.term.action",
        BACKBONE,
        &[
            one("context", "Reference"),
            many("contextLinkId", "string"),
            one("doNotPerform", "boolean"),
            req("intent", "CodeableConcept"),
            many("linkId", "string"),
            many("note", "Annotation"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrencePeriod", "Period"),
            one("occurrenceTiming", "Timing"),
            one("performer", "Reference"),
            many("performerLinkId", "string"),
            one("performerRole", "CodeableConcept"),
            many("performerType", "CodeableConcept"),
            many("reason", "string"),
            many("reasonCode", "CodeableConcept"),
            many("reasonLinkId", "string"),
            many("reasonReference", "Reference"),
            many("requester", "Reference"),
            many("requesterLinkId", "string"),
            many("securityLabelNumber", "unsignedInt"),
            req("status", "CodeableConcept"),
            many("subject", "Contract.term.action.subject"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "Contract.term.action.subject",
        BACKBONE,
        &[
            req_many("reference", "Reference"),
            one("role", "CodeableConcept"),
        ],
    ),
    def(
        "Contract.signer",
        BACKBONE,
        &[
            req("party", "Reference"),
            req_many("signature", "Signature"),
            req("type", "Coding"),
        ],
    ),
    def(
        "Contract.friendly",
        BACKBONE,
        &[
            req("contentAttachment", "Attachment"),
            req("contentReference", "Reference"),
        ],
    ),
    def(
        "Contract.legal",
        BACKBONE,
        &[
            req("contentAttachment", "Attachment"),
            req("contentReference", "Reference"),
        ],
    ),
    def(
        "Contract.rule",
        BACKBONE,
        &[
            req("contentAttachment", "Attachment"),
            req("contentReference", "Reference"),
        ],
    ),
    // Coverage
    def(
        "Coverage",
        DOMAIN,
        &[
            req("beneficiary", "Reference"),
            many("class", "Coverage.class"),
            many("contract", "Reference"),
            many("costToBeneficiary", "Coverage.costToBeneficiary"),
            one("dependent", "string"),
            many("identifier", "Identifier"),
            one("network", "string"),
            one("order", "positiveInt"),
            req_many("payor", "Reference"),
            one("period", "Period"),
            one("policyHolder", "Reference"),
            one("relationship", "CodeableConcept"),
            req("status", "code"),
            one("subrogation", "boolean"),
            one("subscriber", "Reference"),
            one("subscriberId", "string"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "Coverage.class",
        BACKBONE,
        &[
            one("name", "string"),
            req("type", "CodeableConcept"),
            req("value", "string"),
        ],
    ),
    def(
        "Coverage.costToBeneficiary",
        BACKBONE,
        &[
            many("exception", "Coverage.costToBeneficiary.exception"),
            one("type", "CodeableConcept"),
            req("valueMoney", "Money"),
            req("valueQuantity", "Quantity"),
        ],
    ),
    def(
        "Coverage.costToBeneficiary.exception",
        BACKBONE,
        &[one("period", "Period"), req("type", "CodeableConcept")],
    ),
    // CoverageEligibilityRequest
    def(
        "CoverageEligibilityRequest",
        DOMAIN,
        &[
            req("created", "dateTime"),
            one("enterer", "Reference"),
            one("facility", "Reference"),
            many("identifier", "Identifier"),
            many("insurance", "CoverageEligibilityRequest.insurance"),
            req("insurer", "Reference"),
            many("item", "CoverageEligibilityRequest.item"),
            req("patient", "Reference"),
            one("priority", "CodeableConcept"),
            one("provider", "Reference"),
            req_many("purpose", "code"),
            one("servicedDate", "date"),
            one("servicedPeriod", "Period"),
            req("status", "code"),
            many("supportingInfo", "CoverageEligibilityRequest.supportingInfo"),
        ],
    ),
    def(
        "CoverageEligibilityRequest.supportingInfo",
        BACKBONE,
        &[
            one("appliesToAll", "boolean"),
            req("information", "Reference"),
            req("sequence", "positiveInt"),
        ],
    ),
    def(
        "CoverageEligibilityRequest.insurance",
        BACKBONE,
        &[
            one("businessArrangement", "string"),
            req("coverage", "Reference"),
            one("focal", "boolean"),
        ],
    ),
    def(
        "CoverageEligibilityRequest.item",
        BACKBONE,
        &[
            one("category", "CodeableConcept"),
            many("detail", "Reference"),
            many("diagnosis", "CoverageEligibilityRequest.item.diagnosis"),
            one("facility", "Reference"),
            many("modifier", "CodeableConcept"),
            one("productOrService", "CodeableConcept"),
            one("provider", "Reference"),
            one("quantity", "Quantity"),
            many("supportingInfoSequence", "positiveInt"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "CoverageEligibilityRequest.item.diagnosis",
        BACKBONE,
        &[
            one("diagnosisCodeableConcept", "CodeableConcept"),
            one("diagnosisReference", "Reference"),
        ],
    ),
    // CoverageEligibilityResponse
    def(
        "CoverageEligibilityResponse",
        DOMAIN,
        &[
            req("created", "dateTime"),
            one("disposition", "string"),
            many("error", "CoverageEligibilityResponse.error"),
            one("form", "CodeableConcept"),
            many("identifier", "Identifier"),
            many("insurance", "CoverageEligibilityResponse.insurance"),
            req("insurer", "Reference"),
            req("outcome", "code"),
            req("patient", "Reference"),
            one("preAuthRef", "string"),
            req_many("purpose", "code"),
            req("request", "Reference"),
            one("requestor", "Reference"),
            one("servicedDate", "date"),
            one("servicedPeriod", "Period"),
            req("status", "code"),
        ],
    ),
    def(
        "CoverageEligibilityResponse.insurance",
        BACKBONE,
        &[
            one("benefitPeriod", "Period"),
            req("coverage", "Reference"),
            one("inforce", "boolean"),
            many("item", "CoverageEligibilityResponse.insurance.item"),
        ],
    ),
    def(
        "CoverageEligibilityResponse.insurance.item",
        BACKBONE,
        &[
            one("authorizationRequired", "boolean"),
            many("authorizationSupporting", "CodeableConcept"),
            one("authorizationUrl", "uri"),
            many("benefit", "CoverageEligibilityResponse.insurance.item.benefit"),
            one("category", "CodeableConcept"),
            one("description", "string"),
            one("excluded", "boolean"),
            many("modifier", "CodeableConcept"),
            one("name", "string"),
            one("network", "CodeableConcept"),
            one("productOrService", "CodeableConcept"),
            one("provider", "Reference"),
            one("term", "CodeableConcept"),
            one("unit", "CodeableConcept"),
        ],
    ),
    def(
        "CoverageEligibilityResponse.insurance.item.benefit",
        BACKBONE,
        &[
            one("allowedMoney", "Money"),
            one("allowedString", "string"),
            one("allowedUnsignedInt", "unsignedInt"),
            req("type", "CodeableConcept"),
            one("usedMoney", "Money"),
            one("usedString", "string"),
            one("usedUnsignedInt", "unsignedInt"),
        ],
    ),
    def(
        "CoverageEligibilityResponse.error",
        BACKBONE,
        &[req("code", "CodeableConcept")],
    ),
    // DetectedIssue
    def(
        "DetectedIssue",
        DOMAIN,
        &[
            one("author", "Reference"),
            one("code", "CodeableConcept"),
            one("detail", "string"),
            many("evidence", "DetectedIssue.evidence"),
            one("identifiedDateTime", "dateTime"),
            one("identifiedPeriod", "Period"),
            many("identifier", "Identifier"),
            many("implicated", "Reference"),
            many("mitigation", "DetectedIssue.mitigation"),
            one("patient", "Reference"),
            one("reference", "uri"),
            one("severity", "code"),
            req("status", "code"),
        ],
    ),
    def(
        "DetectedIssue.evidence",
        BACKBONE,
        &[
            many("code", "CodeableConcept"),
            many("detail", "Reference"),
        ],
    ),
    def(
        "DetectedIssue.mitigation",
        BACKBONE,
        &[
            req("action", "CodeableConcept"),
            one("author", "Reference"),
            one("date", "dateTime"),
        ],
    ),
    // Device
    def(
        "Device",
        DOMAIN,
        &[
            many("contact", "ContactPoint"),
            one("definition", "Reference"),
            many("deviceName", "Device.deviceName"),
            one("distinctIdentifier", "string"),
            one("expirationDate", "dateTime"),
            many("identifier", "Identifier"),
            one("location", "Reference"),
            one("lotNumber", "string"),
            one("manufactureDate", "dateTime"),
            one("manufacturer", "string"),
            one("modelNumber", "string"),
            many("note", "Annotation"),
            one("owner", "Reference"),
            one("parent", "Reference"),
            one("partNumber", "string"),
            one("patient", "Reference"),
            many("property", "Device.property"),
            many("safety", "CodeableConcept"),
            one("serialNumber", "string"),
            many("specialization", "Device.specialization"),
            one("status", "code"),
            many("statusReason", "CodeableConcept"),
            one("type", "CodeableConcept"),
            many("udiCarrier", "Device.udiCarrier"),
            one("url", "uri"),
            many("version", "Device.version"),
        ],
    ),
    def(
        "Device.udiCarrier",
        BACKBONE,
        &[
            one("carrierAIDC", "base64Binary"),
            one("carrierHRF", "string"),
            one("deviceIdentifier", "string"),
            one("entryType", "code"),
            one("issuer", "uri"),
            one("jurisdiction", "uri"),
        ],
    ),
    def(
        "Device.deviceName",
        BACKBONE,
        &[req("name", "string"), req("type", "code")],
    ),
    def(
        "Device.specialization",
        BACKBONE,
        &[
            req("systemType", "CodeableConcept"),
            one("version", "string"),
        ],
    ),
    def(
        "Device.version",
        BACKBONE,
        &[
            one("component", "Identifier"),
            one("type", "CodeableConcept"),
            req("value", "string"),
        ],
    ),
    def(
        "Device.property",
        BACKBONE,
        &[
            req("type", "CodeableConcept"),
            many("valueCode", "CodeableConcept"),
            many("valueQuantity", "Quantity"),
        ],
    ),
    // DeviceDefinition
    def(
        "DeviceDefinition",
        DOMAIN,
        &[
            many("capability", "DeviceDefinition.capability"),
            many("contact", "ContactPoint"),
            many("deviceName", "DeviceDefinition.deviceName"),
            many("identifier", "Identifier"),
            many("languageCode", "CodeableConcept"),
            one("manufacturerReference", "Reference"),
            one("manufacturerString", "string"),
            many("material", "DeviceDefinition.material"),
            one("modelNumber", "string"),
            many("note", "Annotation"),
            one("onlineInformation", "uri"),
            one("owner", "Reference"),
            one("parentDevice", "Reference"),
            one("physicalCharacteristics", "ProdCharacteristic"),
            many("property", "DeviceDefinition.property"),
            one("quantity", "Quantity"),
            many("safety", "CodeableConcept"),
            many("shelfLifeStorage", "ProductShelfLife"),
            many("specialization", "DeviceDefinition.specialization"),
            one("type", "CodeableConcept"),
            many("udiDeviceIdentifier", "DeviceDefinition.udiDeviceIdentifier"),
            one("url", "uri"),
            many("version", "string"),
        ],
    ),
    def(
        "DeviceDefinition.udiDeviceIdentifier",
        BACKBONE,
        &[
            req("deviceIdentifier", "string"),
            req("issuer", "uri"),
            req("jurisdiction", "uri"),
        ],
    ),
    def(
        "DeviceDefinition.deviceName",
        BACKBONE,
        &[req("name", "string"), req("type", "code")],
    ),
    def(
        "DeviceDefinition.specialization",
        BACKBONE,
        &[req("systemType", "string"), one("version", "string")],
    ),
    def(
        "DeviceDefinition.capability",
        BACKBONE,
        &[
            many("description", "CodeableConcept"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "DeviceDefinition.property",
        BACKBONE,
        &[
            req("type", "CodeableConcept"),
            many("valueCode", "CodeableConcept"),
            many("valueQuantity", "Quantity"),
        ],
    ),
    def(
        "DeviceDefinition.material",
        BACKBONE,
        &[
            one("allergenicIndicator", "boolean"),
            one("alternate", "boolean"),
            req("substance", "CodeableConcept"),
        ],
    ),
    // DeviceMetric
    def(
        "DeviceMetric",
        DOMAIN,
        &[
            many("calibration", "DeviceMetric.calibration"),
            req("category", "code"),
            one("color", "code"),
            many("identifier", "Identifier"),
            one("measurementPeriod", "Timing"),
            one("operationalStatus", "code"),
            one("parent", "Reference"),
            one("source", "Reference"),
            req("type", "CodeableConcept"),
            one("unit", "CodeableConcept"),
        ],
    ),
    def(
        "DeviceMetric.calibration",
        BACKBONE,
        &[
            one("state", "code"),
            one("time", "instant"),
            one("type", "code"),
        ],
    ),
    // DeviceRequest
    def(
        "DeviceRequest",
        DOMAIN,
        &[
            one("authoredOn", "dateTime"),
            many("basedOn", "Reference"),
            req("codeCodeableConcept", "CodeableConcept"),
            req("codeReference", "Reference"),
            one("encounter", "Reference"),
            one("groupIdentifier", "Identifier"),
            many("identifier", "Identifier"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            many("insurance", "Reference"),
            req("intent", "code"),
            many("note", "Annotation"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrencePeriod", "Period"),
            one("occurrenceTiming", "Timing"),
            many("parameter", "DeviceRequest.parameter"),
            one("performer", "Reference"),
            one("performerType", "CodeableConcept"),
            many("priorRequest", "Reference"),
            one("priority", "code"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            many("relevantHistory", "Reference"),
            one("requester", "Reference"),
            one("status", "code"),
            req("subject", "Reference"),
            many("supportingInfo", "Reference"),
        ],
    ),
    def(
        "DeviceRequest.parameter",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("valueBoolean", "boolean"),
            one("valueCodeableConcept", "CodeableConcept"),
            one("valueQuantity", "Quantity"),
            one("valueRange", "Range"),
        ],
    ),
    // DeviceUseStatement
    def(
        "DeviceUseStatement",
        DOMAIN,
        &[
            many("basedOn", "Reference"),
            one("bodySite", "CodeableConcept"),
            many("derivedFrom", "Reference"),
            req("device", "Reference"),
            many("identifier", "Identifier"),
            many("note", "Annotation"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("recordedOn", "dateTime"),
            one("source", "Reference"),
            req("status", "code"),
            req("subject", "Reference"),
            one("timingDateTime", "dateTime"),
            one("timingPeriod", "Period"),
            one("timingTiming", "Timing"),
        ],
    ),
    // DiagnosticReport
    def(
        "DiagnosticReport",
        DOMAIN,
        &[
            many("basedOn", "Reference"),
            many("category", "CodeableConcept"),
            req("code", "CodeableConcept"),
            one("conclusion", "string"),
            many("conclusionCode", "CodeableConcept"),
            one("effectiveDateTime", "dateTime"),
            one("effectivePeriod", "Period"),
            one("encounter", "Reference"),
            many("identifier", "Identifier"),
            many("imagingStudy", "Reference"),
            one("issued", "instant"),
            many("media", "DiagnosticReport.media"),
            many("performer", "Reference"),
            many("presentedForm", "Attachment"),
            many("result", "Reference"),
            many("resultsInterpreter", "Reference"),
            many("specimen", "Reference"),
            req("status", "code"),
            one("subject", "Reference"),
        ],
    ),
    def(
        "DiagnosticReport.media",
        BACKBONE,
        &[one("comment", "string"), req("link", "Reference")],
    ),
    // DocumentManifest
    def(
        "DocumentManifest",
        DOMAIN,
        &[
            many("author", "Reference"),
            req_many("content", "Reference"),
            one("created", "dateTime"),
            one("description", "string"),
            many("identifier", "Identifier"),
            one("masterIdentifier", "Identifier"),
            many("recipient", "Reference"),
            many("related", "DocumentManifest.related"),
            one("source", "uri"),
            req("status", "code"),
            one("subject", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "DocumentManifest.related",
        BACKBONE,
        &[one("identifier", "Identifier"), one("ref", "Reference")],
    ),
    // DocumentReference
    def(
        "DocumentReference",
        DOMAIN,
        &[
            one("authenticator", "Reference"),
            many("author", "Reference"),
            many("category", "CodeableConcept"),
            req_many("content", "DocumentReference.content"),
            one("context", "DocumentReference.context"),
            one("custodian", "Reference"),
            one("date", "instant"),
            one("description", "string"),
            one("docStatus", "code"),
            many("identifier", "Identifier"),
            one("masterIdentifier", "Identifier"),
            many("relatesTo", "DocumentReference.relatesTo"),
            many("securityLabel", "CodeableConcept"),
            req("status", "code"),
            one("subject", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "DocumentReference.content",
        BACKBONE,
        &[req("attachment", "Attachment"), one("format", "Coding")],
    ),
    def(
        "DocumentReference.context",
        BACKBONE,
        &[
            many("encounter", "Reference"),
            many("event", "CodeableConcept"),
            one("facilityType", "CodeableConcept"),
            one("period", "Period"),
            one("practiceSetting", "CodeableConcept"),
            many("related", "Reference"),
            one("sourcePatientInfo", "Reference"),
        ],
    ),
    def(
        "DocumentReference.relatesTo",
        BACKBONE,
        &[req("code", "code"), req("target", "Reference")],
    ),
    // EffectEvidenceSynthesis
    def(
        "EffectEvidenceSynthesis",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            many("certainty", "EffectEvidenceSynthesis.certainty"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            many("effectEstimate", "EffectEvidenceSynthesis.effectEstimate"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            req("exposure", "Reference"),
            req("exposureAlternative", "Reference"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            one("name", "string"),
            many("note", "Annotation"),
            req("outcome", "Reference"),
            req("population", "Reference"),
            one("publisher", "string"),
            many("relatedArtifact", "RelatedArtifact"),
            many("resultsByExposure", "EffectEvidenceSynthesis.resultsByExposure"),
            many("reviewer", "ContactDetail"),
            one("sampleSize", "EffectEvidenceSynthesis.sampleSize"),
            req("status", "code"),
            one("studyType", "CodeableConcept"),
            one("synthesisType", "CodeableConcept"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "EffectEvidenceSynthesis.sampleSize",
        BACKBONE,
        &[
            one("description", "string"),
            one("numberOfParticipants", "integer"),
            one("numberOfStudies", "integer"),
        ],
    ),
    def(
        "EffectEvidenceSynthesis.resultsByExposure",
        BACKBONE,
        &[
            one("description", "string"),
            one("exposureState", "code"),
            req("riskEvidenceSynthesis", "Reference"),
            one("variantState", "CodeableConcept"),
        ],
    ),
    def(
        "EffectEvidenceSynthesis.effectEstimate",
        BACKBONE,
        &[
            one("description", "string"),
            many("precisionEstimate", "EffectEvidenceSynthesis.effectEstimate.precisionEstimate"),
            one("type", "CodeableConcept"),
            one("unitOfMeasure", "CodeableConcept"),
            one("value", "decimal"),
            one("variantState", "CodeableConcept"),
        ],
    ),
    def(
        "EffectEvidenceSynthesis.effectEstimate.precisionEstimate",
        BACKBONE,
        &[
            one("from", "decimal"),
            one("level", "decimal"),
            one("to", "decimal"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "EffectEvidenceSynthesis.certainty",
        BACKBONE,
        &[
            many("certaintySubcomponent", "EffectEvidenceSynthesis.certainty.certaintySubcomponent"),
            many("note", "Annotation"),
            many("rating", "CodeableConcept"),
        ],
    ),
    def(
        "EffectEvidenceSynthesis.certainty.certaintySubcomponent",
        BACKBONE,
        &[
            many("note", "Annotation"),
            many("rating", "CodeableConcept"),
            one("type", "CodeableConcept"),
        ],
    ),
    // Encounter
    def(
        "Encounter",
        DOMAIN,
        &[
            many("account", "Reference"),
            many("appointment", "Reference"),
            many("basedOn", "Reference"),
            req("class", "Coding"),
            many("classHistory", "Encounter.classHistory"),
            many("diagnosis", "Encounter.diagnosis"),
            many("episodeOfCare", "Reference"),
            one("hospitalization", "Encounter.hospitalization"),
            many("identifier", "Identifier"),
            one("length", "Duration"),
            many("location", "Encounter.location"),
            one("partOf", "Reference"),
            many("participant", "Encounter.participant"),
            one("period", "Period"),
            one("priority", "CodeableConcept"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("serviceProvider", "Reference"),
            one("serviceType", "CodeableConcept"),
            req("status", "code"),
            many("statusHistory", "Encounter.statusHistory"),
            one("subject", "Reference"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "Encounter.classHistory",
        BACKBONE,
        &[req("class", "Coding"), req("period", "Period")],
    ),
    def(
        "Encounter.diagnosis",
        BACKBONE,
        &[
            req("condition", "Reference"),
            one("rank", "positiveInt"),
            one("use", "CodeableConcept"),
        ],
    ),
    def(
        "Encounter.hospitalization",
        BACKBONE,
        &[
            one("admitSource", "CodeableConcept"),
            one("destination", "Reference"),
            many("dietPreference", "CodeableConcept"),
            one("dischargeDisposition", "CodeableConcept"),
            one("origin", "Reference"),
            one("preAdmissionIdentifier", "Identifier"),
            one("reAdmission", "CodeableConcept"),
            many("specialArrangement", "CodeableConcept"),
            many("specialCourtesy", "CodeableConcept"),
        ],
    ),
    def(
        "Encounter.location",
        BACKBONE,
        &[
            req("location", "Reference"),
            one("period", "Period"),
            one("physicalType", "CodeableConcept"),
            one("status", "code"),
        ],
    ),
    def(
        "Encounter.participant",
        BACKBONE,
        &[
            one("individual", "Reference"),
            one("period", "Period"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "Encounter.statusHistory",
        BACKBONE,
        &[req("period", "Period"), req("status", "code")],
    ),
    // Endpoint
    def(
        "Endpoint",
        DOMAIN,
        &[
            req("address", "url"),
            req("connectionType", "Coding"),
            many("contact", "ContactPoint"),
            many("header", "string"),
            many("identifier", "Identifier"),
            one("managingOrganization", "Reference"),
            one("name", "string"),
            many("payloadMimeType", "code"),
            req_many("payloadType", "CodeableConcept"),
            one("period", "Period"),
            req("status", "code"),
        ],
    ),
    // EnrollmentRequest
    def(
        "EnrollmentRequest",
        DOMAIN,
        &[
            one("candidate", "Reference"),
            one("coverage", "Reference"),
            one("created", "dateTime"),
            many("identifier", "Identifier"),
            one("insurer", "Reference"),
            one("provider", "Reference"),
            one("status", "code"),
        ],
    ),
    // EnrollmentResponse
    def(
        "EnrollmentResponse",
        DOMAIN,
        &[
            one("created", "dateTime"),
            one("disposition", "string"),
            many("identifier", "Identifier"),
            one("organization", "Reference"),
            one("outcome", "code"),
            one("request", "Reference"),
            one("requestProvider", "Reference"),
            one("status", "code"),
        ],
    ),
    // EpisodeOfCare
    def(
        "EpisodeOfCare",
        DOMAIN,
        &[
            many("account", "Reference"),
            one("careManager", "Reference"),
            many("diagnosis", "EpisodeOfCare.diagnosis"),
            many("identifier", "Identifier"),
            one("managingOrganization", "Reference"),
            req("patient", "Reference"),
            one("period", "Period"),
            many("referralRequest", "Reference"),
            req("status", "code"),
            many("statusHistory", "EpisodeOfCare.statusHistory"),
            many("team", "Reference"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "EpisodeOfCare.statusHistory",
        BACKBONE,
        &[req("period", "Period"), req("status", "code")],
    ),
    def(
        "EpisodeOfCare.diagnosis",
        BACKBONE,
        &[
            req("condition", "Reference"),
            one("rank", "positiveInt"),
            one("role", "CodeableConcept"),
        ],
    ),
    // EventDefinition
    def(
        "EventDefinition",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            one("experimental", "boolean"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            one("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            req("status", "code"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            one("subtitle", "string"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            req_many("trigger", "TriggerDefinition"),
            one("url", "uri"),
            one("usage", "string"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    // Evidence
    def(
        "Evidence",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            req("exposureBackground", "Reference"),
            many("exposureVariant", "Reference"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            one("name", "string"),
            many("note", "Annotation"),
            many("outcome", "Reference"),
            one("publisher", "string"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            one("shortTitle", "string"),
            req("status", "code"),
            one("subtitle", "string"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    // EvidenceVariable
    def(
        "EvidenceVariable",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            req_many("characteristic", "EvidenceVariable.characteristic"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            one("name", "string"),
            many("note", "Annotation"),
            one("publisher", "string"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            one("shortTitle", "string"),
            req("status", "code"),
            one("subtitle", "string"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            one("type", "code"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "EvidenceVariable.characteristic",
        BACKBONE,
        &[
            req("definitionCanonical", "canonical"),
            req("definitionCodeableConcept", "CodeableConcept"),
            req("definitionDataRequirement", "DataRequirement"),
            req("definitionExpression", "Expression"),
            req("definitionReference", "Reference"),
            req("definitionTriggerDefinition", "TriggerDefinition"),
            one("description", "string"),
            one("exclude", "boolean"),
            one("groupMeasure", "code"),
            one("participantEffectiveDateTime", "dateTime"),
            one("participantEffectiveDuration", "Duration"),
            one("participantEffectivePeriod", "Period"),
            one("participantEffectiveTiming", "Timing"),
            one("timeFromStart", "Duration"),
            many("usageContext", "UsageContext"),
        ],
    ),
    // ExampleScenario
    def(
        "ExampleScenario",
        DOMAIN,
        &[
            many("actor", "ExampleScenario.actor"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("experimental", "boolean"),
            many("identifier", "Identifier"),
            many("instance", "ExampleScenario.instance"),
            many("jurisdiction", "CodeableConcept"),
            one("name", "string"),
            many("process", "ExampleScenario.process"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            req("status", "code"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
            many("workflow", "canonical"),
        ],
    ),
    def(
        "ExampleScenario.actor",
        BACKBONE,
        &[
            req("actorId", "string"),
            one("description", "markdown"),
            one("name", "string"),
            req("type", "code"),
        ],
    ),
    def(
        "ExampleScenario.instance",
        BACKBONE,
        &[
            many("containedInstance", "ExampleScenario.instance.containedInstance"),
            one("description", "markdown"),
            one("name", "string"),
            req("resourceId", "string"),
            req("resourceType", "code"),
            many("version", "ExampleScenario.instance.version"),
        ],
    ),
    def(
        "ExampleScenario.instance.version",
        BACKBONE,
        &[
            req("description", "markdown"),
            req("versionId", "string"),
        ],
    ),
    def(
        "ExampleScenario.instance.containedInstance",
        BACKBONE,
        &[req("resourceId", "string"), one("versionId", "string")],
    ),
    def(
        "ExampleScenario.process",
        BACKBONE,
        &[
            one("description", "markdown"),
            one("postConditions", "markdown"),
            one("preConditions", "markdown"),
            many("step", "ExampleScenario.process.step"),
            req("title", "string"),
        ],
    ),
    def(
        "ExampleScenario.process.step",
        BACKBONE,
        &[
            many("alternative", "ExampleScenario.process.step.alternative"),
            one("operation", "ExampleScenario.process.step.operation"),
            one("pause", "boolean"),
            many("process", "ExampleScenario.process"),
        ],
    ),
    def(
        "ExampleScenario.process.step.operation",
        BACKBONE,
        &[
            one("description", "markdown"),
            one("initiator", "string"),
            one("initiatorActive", "boolean"),
            one("name", "string"),
            req("number", "string"),
            one("receiver", "string"),
            one("receiverActive", "boolean"),
            one("request", "ExampleScenario.instance.containedInstance"),
            one("response", "ExampleScenario.instance.containedInstance"),
            one("type", "string"),
        ],
    ),
    def(
        "ExampleScenario.process.step.alternative",
        BACKBONE,
        &[
            one("description", "markdown"),
            many("step", "ExampleScenario.process.step"),
            req("title", "string"),
        ],
    ),
    // ExplanationOfBenefit
    def(
        "ExplanationOfBenefit",
        DOMAIN,
        &[
            one("accident", "ExplanationOfBenefit.accident"),
            many("addItem", "ExplanationOfBenefit.addItem"),
            many("adjudication", "ExplanationOfBenefit.item.adjudication"),
            many("benefitBalance", "ExplanationOfBenefit.benefitBalance"),
            one("benefitPeriod", "Period"),
            one("billablePeriod", "Period"),
            many("careTeam", "ExplanationOfBenefit.careTeam"),
            one("claim", "Reference"),
            one("claimResponse", "Reference"),
            req("created", "dateTime"),
            many("diagnosis", "ExplanationOfBenefit.diagnosis"),
            one("disposition", "string"),
            one("enterer", "Reference"),
            one("facility", "Reference"),
            one("form", "Attachment"),
            one("formCode", "CodeableConcept"),
            one("fundsReserve", "CodeableConcept"),
            one("fundsReserveRequested", "CodeableConcept"),
            many("identifier", "Identifier"),
            req_many("insurance", "ExplanationOfBenefit.insurance"),
            req("insurer", "Reference"),
            many("item", "ExplanationOfBenefit.item"),
            one("originalPrescription", "Reference"),
            req("outcome", "code"),
            req("patient", "Reference"),
            one("payee", "ExplanationOfBenefit.payee"),
            one("payment", "ExplanationOfBenefit.payment"),
            many("preAuthRef", "string"),
            many("preAuthRefPeriod", "Period"),
            one("precedence", "positiveInt"),
            one("prescription", "Reference"),
            one("priority", "CodeableConcept"),
            many("procedure", "ExplanationOfBenefit.procedure"),
            many("processNote", "ExplanationOfBenefit.processNote"),
            req("provider", "Reference"),
            one("referral", "Reference"),
            many("related", "ExplanationOfBenefit.related"),
            req("status", "code"),
            one("subType", "CodeableConcept"),
            many("supportingInfo", "ExplanationOfBenefit.supportingInfo"),
            many("total", "ExplanationOfBenefit.total"),
            req("type", "CodeableConcept"),
            req("use", "code"),
        ],
    ),
    def(
        "ExplanationOfBenefit.related",
        BACKBONE,
        &[
            one("claim", "Reference"),
            one("reference", "Identifier"),
            one("relationship", "CodeableConcept"),
        ],
    ),
    def(
        "ExplanationOfBenefit.payee",
        BACKBONE,
        &[one("party", "Reference"), one("type", "CodeableConcept")],
    ),
    def(
        "ExplanationOfBenefit.careTeam",
        BACKBONE,
        &[
            req("provider", "Reference"),
            one("qualification", "CodeableConcept"),
            one("responsible", "boolean"),
            one("role", "CodeableConcept"),
            req("sequence", "positiveInt"),
        ],
    ),
    def(
        "ExplanationOfBenefit.supportingInfo",
        BACKBONE,
        &[
            req("category", "CodeableConcept"),
            one("code", "CodeableConcept"),
            one("reason", "Coding"),
            req("sequence", "positiveInt"),
            one("timingDate", "date"),
            one("timingPeriod", "Period"),
            one("valueAttachment", "Attachment"),
            one("valueBoolean", "boolean"),
            one("valueQuantity", "Quantity"),
            one("valueReference", "Reference"),
            one("valueString", "string"),
        ],
    ),
    def(
        "ExplanationOfBenefit.diagnosis",
        BACKBONE,
        &[
            req("diagnosisCodeableConcept", "CodeableConcept"),
            req("diagnosisReference", "Reference"),
            one("onAdmission", "CodeableConcept"),
            one("packageCode", "CodeableConcept"),
            req("sequence", "positiveInt"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "ExplanationOfBenefit.procedure",
        BACKBONE,
        &[
            one("date", "dateTime"),
            req("procedureCodeableConcept", "CodeableConcept"),
            req("procedureReference", "Reference"),
            req("sequence", "positiveInt"),
            many("type", "CodeableConcept"),
            many("udi", "Reference"),
        ],
    ),
    def(
        "ExplanationOfBenefit.insurance",
        BACKBONE,
        &[
            req("coverage", "Reference"),
            req("focal", "boolean"),
            many("preAuthRef", "string"),
        ],
    ),
    def(
        "ExplanationOfBenefit.accident",
        BACKBONE,
        &[
            one("date", "date"),
            one("locationAddress", "Address"),
            one("locationReference", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "ExplanationOfBenefit.item",
        BACKBONE,
        &[
            many("adjudication", "ExplanationOfBenefit.item.adjudication"),
            one("bodySite", "CodeableConcept"),
            many("careTeamSequence", "positiveInt"),
            one("category", "CodeableConcept"),
            many("detail", "ExplanationOfBenefit.item.detail"),
            many("diagnosisSequence", "positiveInt"),
            many("encounter", "Reference"),
            one("factor", "decimal"),
            many("informationSequence", "positiveInt"),
            one("locationAddress", "Address"),
            one("locationCodeableConcept", "CodeableConcept"),
            one("locationReference", "Reference"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            many("procedureSequence", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            many("programCode", "CodeableConcept"),
            one("quantity", "Quantity"),
            one("revenue", "CodeableConcept"),
            req("sequence", "positiveInt"),
            one("servicedDate", "date"),
            one("servicedPeriod", "Period"),
            many("subSite", "CodeableConcept"),
            many("udi", "Reference"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ExplanationOfBenefit.item.adjudication",
        BACKBONE,
        &[
            one("amount", "Money"),
            req("category", "CodeableConcept"),
            one("reason", "CodeableConcept"),
            one("value", "decimal"),
        ],
    ),
    def(
        "ExplanationOfBenefit.item.detail",
        BACKBONE,
        &[
            many("adjudication", "ExplanationOfBenefit.item.adjudication"),
            one("category", "CodeableConcept"),
            one("factor", "decimal"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            many("programCode", "CodeableConcept"),
            one("quantity", "Quantity"),
            one("revenue", "CodeableConcept"),
            req("sequence", "positiveInt"),
            many("subDetail", "ExplanationOfBenefit.item.detail.subDetail"),
            many("udi", "Reference"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ExplanationOfBenefit.item.detail.subDetail",
        BACKBONE,
        &[
            many("adjudication", "ExplanationOfBenefit.item.adjudication"),
            one("category", "CodeableConcept"),
            one("factor", "decimal"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            many("programCode", "CodeableConcept"),
            one("quantity", "Quantity"),
            one("revenue", "CodeableConcept"),
            req("sequence", "positiveInt"),
            many("udi", "Reference"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ExplanationOfBenefit.addItem",
        BACKBONE,
        &[
            many("adjudication", "ExplanationOfBenefit.item.adjudication"),
            one("bodySite", "CodeableConcept"),
            many("detail", "ExplanationOfBenefit.addItem.detail"),
            many("detailSequence", "positiveInt"),
            one("factor", "decimal"),
            many("itemSequence", "positiveInt"),
            one("locationAddress", "Address"),
            one("locationCodeableConcept", "CodeableConcept"),
            one("locationReference", "Reference"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            many("programCode", "CodeableConcept"),
            many("provider", "Reference"),
            one("quantity", "Quantity"),
            one("servicedDate", "date"),
            one("servicedPeriod", "Period"),
            many("subDetailSequence", "positiveInt"),
            many("subSite", "CodeableConcept"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ExplanationOfBenefit.addItem.detail",
        BACKBONE,
        &[
            many("adjudication", "ExplanationOfBenefit.item.adjudication"),
            one("factor", "decimal"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            one("quantity", "Quantity"),
            many("subDetail", "ExplanationOfBenefit.addItem.detail.subDetail"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ExplanationOfBenefit.addItem.detail.subDetail",
        BACKBONE,
        &[
            many("adjudication", "ExplanationOfBenefit.item.adjudication"),
            one("factor", "decimal"),
            many("modifier", "CodeableConcept"),
            one("net", "Money"),
            many("noteNumber", "positiveInt"),
            req("productOrService", "CodeableConcept"),
            one("quantity", "Quantity"),
            one("unitPrice", "Money"),
        ],
    ),
    def(
        "ExplanationOfBenefit.total",
        BACKBONE,
        &[
            req("amount", "Money"),
            req("category", "CodeableConcept"),
        ],
    ),
    def(
        "ExplanationOfBenefit.payment",
        BACKBONE,
        &[
            one("adjustment", "Money"),
            one("adjustmentReason", "CodeableConcept"),
            one("amount", "Money"),
            one("date", "date"),
            one("identifier", "Identifier"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "ExplanationOfBenefit.processNote",
        BACKBONE,
        &[
            one("language", "CodeableConcept"),
            one("number", "positiveInt"),
            one("text", "string"),
            one("type", "code"),
        ],
    ),
    def(
        "ExplanationOfBenefit.benefitBalance",
        BACKBONE,
        &[
            req("category", "CodeableConcept"),
            one("description", "string"),
            one("excluded", "boolean"),
            many("financial", "ExplanationOfBenefit.benefitBalance.financial"),
            one("name", "string"),
            one("network", "CodeableConcept"),
            one("term", "CodeableConcept"),
            one("unit", "CodeableConcept"),
        ],
    ),
    def(
        "ExplanationOfBenefit.benefitBalance.financial",
        BACKBONE,
        &[
            one("allowedMoney", "Money"),
            one("allowedString", "string"),
            one("allowedUnsignedInt", "unsignedInt"),
            req("type", "CodeableConcept"),
            one("usedMoney", "Money"),
            one("usedUnsignedInt", "unsignedInt"),
        ],
    ),
    // FamilyMemberHistory
    def(
        "FamilyMemberHistory",
        DOMAIN,
        &[
            one("ageAge", "Age"),
            one("ageRange", "Range"),
            one("ageString", "string"),
            one("bornDate", "date"),
            one("bornPeriod", "Period"),
            one("bornString", "string"),
            many("condition", "FamilyMemberHistory.condition"),
            one("dataAbsentReason", "CodeableConcept"),
            one("date", "dateTime"),
            one("deceasedAge", "Age"),
            one("deceasedBoolean", "boolean"),
            one("deceasedDate", "date"),
            one("deceasedRange", "Range"),
            one("deceasedString", "string"),
            one("estimatedAge", "boolean"),
            many("identifier", "Identifier"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            one("name", "string"),
            many("note", "Annotation"),
            req("patient", "Reference"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            req("relationship", "CodeableConcept"),
            one("sex", "CodeableConcept"),
            req("status", "code"),
        ],
    ),
    def(
        "FamilyMemberHistory.condition",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            one("contributedToDeath", "boolean"),
            many("note", "Annotation"),
            one("onsetAge", "Age"),
            one("onsetPeriod", "Period"),
            one("onsetRange", "Range"),
            one("onsetString", "string"),
            one("outcome", "CodeableConcept"),
        ],
    ),
    // Flag
    def(
        "Flag",
        DOMAIN,
        &[
            one("author", "Reference"),
            many("category", "CodeableConcept"),
            req("code", "CodeableConcept"),
            one("encounter", "Reference"),
            many("identifier", "Identifier"),
            one("period", "Period"),
            req("status", "code"),
            req("subject", "Reference"),
        ],
    ),
    // Goal
    def(
        "Goal",
        DOMAIN,
        &[
            one("achievementStatus", "CodeableConcept"),
            many("addresses", "Reference"),
            many("category", "CodeableConcept"),
            req("description", "CodeableConcept"),
            one("expressedBy", "Reference"),
            many("identifier", "Identifier"),
            req("lifecycleStatus", "code"),
            many("note", "Annotation"),
            many("outcomeCode", "CodeableConcept"),
            many("outcomeReference", "Reference"),
            one("priority", "CodeableConcept"),
            one("startCodeableConcept", "CodeableConcept"),
            one("startDate", "date"),
            one("statusDate", "date"),
            one("statusReason", "string"),
            req("subject", "Reference"),
            many("target", "Goal.target"),
        ],
    ),
    def(
        "Goal.target",
        BACKBONE,
        &[
            one("detailBoolean", "boolean"),
            one("detailCodeableConcept", "CodeableConcept"),
            one("detailInteger", "integer"),
            one("detailQuantity", "Quantity"),
            one("detailRange", "Range"),
            one("detailRatio", "Ratio"),
            one("detailString", "string"),
            one("dueDate", "date"),
            one("dueDuration", "Duration"),
            one("measure", "CodeableConcept"),
        ],
    ),
    // GraphDefinition
    def(
        "GraphDefinition",
        DOMAIN,
        &[
            many("contact", "ContactDetail"),
            one("date", "dateTime"),
            one("description", "markdown"),
            one("experimental", "boolean"),
            many("jurisdiction", "CodeableConcept"),
            many("link", "GraphDefinition.link"),
            req("name", "string"),
            one("profile", "canonical"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            req("start", "code"),
            req("status", "code"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "GraphDefinition.link",
        BACKBONE,
        &[
            one("description", "string"),
            one("max", "string"),
            one("min", "integer"),
            one("path", "string"),
            one("sliceName", "string"),
            many("target", "GraphDefinition.link.target"),
        ],
    ),
    def(
        "GraphDefinition.link.target",
        BACKBONE,
        &[
            many("compartment", "GraphDefinition.link.target.compartment"),
            many("link", "GraphDefinition.link"),
            one("params", "string"),
            one("profile", "canonical"),
            req("type", "code"),
        ],
    ),
    def(
        "GraphDefinition.link.target.compartment",
        BACKBONE,
        &[
            req("code", "code"),
            one("description", "string"),
            one("expression", "string"),
            req("rule", "code"),
            req("use", "code"),
        ],
    ),
    // Group
    def(
        "Group",
        DOMAIN,
        &[
            one("active", "boolean"),
            req("actual", "boolean"),
            many("characteristic", "Group.characteristic"),
            one("code", "CodeableConcept"),
            many("identifier", "Identifier"),
            one("managingEntity", "Reference"),
            many("member", "Group.member"),
            one("name", "string"),
            one("quantity", "unsignedInt"),
            req("type", "code"),
        ],
    ),
    def(
        "Group.characteristic",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            req("exclude", "boolean"),
            one("period", "Period"),
            req("valueBoolean", "boolean"),
            req("valueCodeableConcept", "CodeableConcept"),
            req("valueQuantity", "Quantity"),
            req("valueRange", "Range"),
            req("valueReference", "Reference"),
        ],
    ),
    def(
        "Group.member",
        BACKBONE,
        &[
            req("entity", "Reference"),
            one("inactive", "boolean"),
            one("period", "Period"),
        ],
    ),
    // GuidanceResponse
    def(
        "GuidanceResponse",
        DOMAIN,
        &[
            many("dataRequirement", "DataRequirement"),
            one("encounter", "Reference"),
            many("evaluationMessage", "Reference"),
            many("identifier", "Identifier"),
            req("moduleCanonical", "canonical"),
            req("moduleCodeableConcept", "CodeableConcept"),
            req("moduleUri", "uri"),
            many("note", "Annotation"),
            one("occurrenceDateTime", "dateTime"),
            one("outputParameters", "Reference"),
            one("performer", "Reference"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("requestIdentifier", "Identifier"),
            one("result", "Reference"),
            req("status", "code"),
            one("subject", "Reference"),
        ],
    ),
    // HealthcareService
    def(
        "HealthcareService",
        DOMAIN,
        &[
            one("active", "boolean"),
            one("appointmentRequired", "boolean"),
            one("availabilityExceptions", "string"),
            many("availableTime", "HealthcareService.availableTime"),
            many("category", "CodeableConcept"),
            many("characteristic", "CodeableConcept"),
            one("comment", "string"),
            many("communication", "CodeableConcept"),
            many("coverageArea", "Reference"),
            many("eligibility", "HealthcareService.eligibility"),
            many("endpoint", "Reference"),
            one("extraDetails", "markdown"),
            many("identifier", "Identifier"),
            many("location", "Reference"),
            one("name", "string"),
            many("notAvailable", "HealthcareService.notAvailable"),
            one("photo", "Attachment"),
            many("program", "CodeableConcept"),
            one("providedBy", "Reference"),
            many("referralMethod", "CodeableConcept"),
            many("serviceProvisionCode", "CodeableConcept"),
            many("specialty", "CodeableConcept"),
            many("telecom", "ContactPoint"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "HealthcareService.eligibility",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("comment", "markdown"),
        ],
    ),
    def(
        "HealthcareService.availableTime",
        BACKBONE,
        &[
            one("allDay", "boolean"),
            one("availableEndTime", "time"),
            one("availableStartTime", "time"),
            many("daysOfWeek", "code"),
        ],
    ),
    def(
        "HealthcareService.notAvailable",
        BACKBONE,
        &[req("description", "string"), one("during", "Period")],
    ),
    // ImagingStudy
    def(
        "ImagingStudy",
        DOMAIN,
        &[
            many("basedOn", "Reference"),
            one("description", "string"),
            one("encounter", "Reference"),
            many("endpoint", "Reference"),
            many("identifier", "Identifier"),
            many("interpreter", "Reference"),
            one("location", "Reference"),
            many("modality", "Coding"),
            many("note", "Annotation"),
            one("numberOfInstances", "unsignedInt"),
            one("numberOfSeries", "unsignedInt"),
            many("procedureCode", "CodeableConcept"),
            one("procedureReference", "Reference"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("referrer", "Reference"),
            many("series", "ImagingStudy.series"),
            one("started", "dateTime"),
            req("status", "code"),
            req("subject", "Reference"),
        ],
    ),
    def(
        "ImagingStudy.series",
        BACKBONE,
        &[
            one("bodySite", "Coding"),
            one("description", "string"),
            many("endpoint", "Reference"),
            many("instance", "ImagingStudy.series.instance"),
            one("laterality", "Coding"),
            req("modality", "Coding"),
            one("number", "unsignedInt"),
            one("numberOfInstances", "unsignedInt"),
            many("performer", "ImagingStudy.series.performer"),
            many("specimen", "Reference"),
            one("started", "dateTime"),
            req("uid", "id"),
        ],
    ),
    def(
        "ImagingStudy.series.performer",
        BACKBONE,
        &[
            req("actor", "Reference"),
            one("function", "CodeableConcept"),
        ],
    ),
    def(
        "ImagingStudy.series.instance",
        BACKBONE,
        &[
            one("number", "unsignedInt"),
            req("sopClass", "Coding"),
            one("title", "string"),
            req("uid", "id"),
        ],
    ),
    // Immunization
    def(
        "Immunization",
        DOMAIN,
        &[
            one("doseQuantity", "Quantity"),
            many("education", "Immunization.education"),
            one("encounter", "Reference"),
            one("expirationDate", "date"),
            one("fundingSource", "CodeableConcept"),
            many("identifier", "Identifier"),
            one("isSubpotent", "boolean"),
            one("location", "Reference"),
            one("lotNumber", "string"),
            one("manufacturer", "Reference"),
            many("note", "Annotation"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrenceString", "string"),
            req("patient", "Reference"),
            many("performer", "Immunization.performer"),
            one("primarySource", "boolean"),
            many("programEligibility", "CodeableConcept"),
            many("protocolApplied", "Immunization.protocolApplied"),
            many("reaction", "Immunization.reaction"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("recorded", "dateTime"),
            one("reportOrigin", "CodeableConcept"),
            one("route", "CodeableConcept"),
            one("site", "CodeableConcept"),
            req("status", "code"),
            one("statusReason", "CodeableConcept"),
            many("subpotentReason", "CodeableConcept"),
            req("vaccineCode", "CodeableConcept"),
        ],
    ),
    def(
        "Immunization.education",
        BACKBONE,
        &[
            one("documentType", "string"),
            one("presentationDate", "dateTime"),
            one("publicationDate", "dateTime"),
            one("reference", "uri"),
        ],
    ),
    def(
        "Immunization.performer",
        BACKBONE,
        &[
            req("actor", "Reference"),
            one("function", "CodeableConcept"),
        ],
    ),
    def(
        "Immunization.protocolApplied",
        BACKBONE,
        &[
            one("authority", "Reference"),
            one("doseNumberPositiveInt", "positiveInt"),
            one("doseNumberString", "string"),
            one("series", "string"),
            one("seriesDosesPositiveInt", "positiveInt"),
            one("seriesDosesString", "string"),
            many("targetDisease", "CodeableConcept"),
        ],
    ),
    def(
        "Immunization.reaction",
        BACKBONE,
        &[
            one("date", "dateTime"),
            one("detail", "Reference"),
            one("reported", "boolean"),
        ],
    ),
    // ImmunizationEvaluation
    def(
        "ImmunizationEvaluation",
        DOMAIN,
        &[
            one("authority", "Reference"),
            one("date", "dateTime"),
            one("description", "string"),
            one("doseNumberPositiveInt", "positiveInt"),
            one("doseNumberString", "string"),
            req("doseStatus", "CodeableConcept"),
            many("doseStatusReason", "CodeableConcept"),
            many("identifier", "Identifier"),
            req("immunizationEvent", "Reference"),
            req("patient", "Reference"),
            one("series", "string"),
            one("seriesDosesPositiveInt", "positiveInt"),
            one("seriesDosesString", "string"),
            req("status", "code"),
            req("targetDisease", "CodeableConcept"),
        ],
    ),
    // ImmunizationRecommendation
    def(
        "ImmunizationRecommendation",
        DOMAIN,
        &[
            one("authority", "Reference"),
            req("date", "dateTime"),
            many("identifier", "Identifier"),
            req("patient", "Reference"),
            req_many("recommendation", "ImmunizationRecommendation.recommendation"),
        ],
    ),
    def(
        "ImmunizationRecommendation.recommendation",
        BACKBONE,
        &[
            many("contraindicatedVaccineCode", "CodeableConcept"),
            many("dateCriterion", "ImmunizationRecommendation.recommendation.dateCriterion"),
            one("description", "string"),
            one("doseNumberPositiveInt", "positiveInt"),
            one("doseNumberString", "string"),
            many("forecastReason", "CodeableConcept"),
            req("forecastStatus", "CodeableConcept"),
            one("series", "string"),
            one("seriesDosesPositiveInt", "positiveInt"),
            one("seriesDosesString", "string"),
            many("supportingImmunization", "Reference"),
            many("supportingPatientInformation", "Reference"),
            one("targetDisease", "CodeableConcept"),
            many("vaccineCode", "CodeableConcept"),
        ],
    ),
    def(
        "ImmunizationRecommendation.recommendation.dateCriterion",
        BACKBONE,
        &[req("code", "CodeableConcept"), req("value", "dateTime")],
    ),
    // ImplementationGuide
    def(
        "ImplementationGuide",
        DOMAIN,
        &[
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("definition", "ImplementationGuide.definition"),
            many("dependsOn", "ImplementationGuide.dependsOn"),
            one("description", "markdown"),
            one("experimental", "boolean"),
            req_many("fhirVersion", "code"),
            many("global", "ImplementationGuide.global"),
            many("jurisdiction", "CodeableConcept"),
            one("license", "code"),
            one("manifest", "ImplementationGuide.manifest"),
            req("name", "string"),
            req("packageId", "id"),
            one("publisher", "string"),
            req("status", "code"),
            one("title", "string"),
            req("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "ImplementationGuide.dependsOn",
        BACKBONE,
        &[
            one("packageId", "id"),
            req("uri", "canonical"),
            one("version", "string"),
        ],
    ),
    def(
        "ImplementationGuide.global",
        BACKBONE,
        &[req("profile", "canonical"), req("type", "code")],
    ),
    def(
        "ImplementationGuide.definition",
        BACKBONE,
        &[
            many("grouping", "ImplementationGuide.definition.grouping"),
            one("page", "ImplementationGuide.definition.page"),
            many("parameter", "ImplementationGuide.definition.parameter"),
            req_many("resource", "ImplementationGuide.definition.resource"),
            many("template", "ImplementationGuide.definition.template"),
        ],
    ),
    def(
        "ImplementationGuide.definition.grouping",
        BACKBONE,
        &[one("description", "string"), req("name", "string")],
    ),
    def(
        "ImplementationGuide.definition.resource",
        BACKBONE,
        &[
            one("description", "string"),
            one("exampleBoolean", "boolean"),
            one("exampleCanonical", "canonical"),
            many("fhirVersion", "code"),
            one("groupingId", "id"),
            one("name", "string"),
            req("reference", "Reference"),
        ],
    ),
    def(
        "ImplementationGuide.definition.page",
        BACKBONE,
        &[
            req("generation", "code"),
            req("nameReference", "Reference"),
            req("nameUrl", "url"),
            many("page", "ImplementationGuide.definition.page"),
            req("title", "string"),
        ],
    ),
    def(
        "ImplementationGuide.definition.parameter",
        BACKBONE,
        &[req("code", "code"), req("value", "string")],
    ),
    def(
        "ImplementationGuide.definition.template",
        BACKBONE,
        &[
            req("code", "code"),
            one("scope", "string"),
            req("source", "string"),
        ],
    ),
    def(
        "ImplementationGuide.manifest",
        BACKBONE,
        &[
            many("image", "string"),
            many("other", "string"),
            many("page", "ImplementationGuide.manifest.page"),
            one("rendering", "url"),
            req_many("resource", "ImplementationGuide.manifest.resource"),
        ],
    ),
    def(
        "ImplementationGuide.manifest.resource",
        BACKBONE,
        &[
            one("exampleBoolean", "boolean"),
            one("exampleCanonical", "canonical"),
            req("reference", "Reference"),
            one("relativePath", "url"),
        ],
    ),
    def(
        "ImplementationGuide.manifest.page",
        BACKBONE,
        &[
            many("anchor", "string"),
            req("name", "string"),
            one("title", "string"),
        ],
    ),
    // InsurancePlan
    def(
        "InsurancePlan",
        DOMAIN,
        &[
            one("administeredBy", "Reference"),
            many("alias", "string"),
            many("contact", "InsurancePlan.contact"),
            many("coverage", "InsurancePlan.coverage"),
            many("coverageArea", "Reference"),
            many("endpoint", "Reference"),
            many("identifier", "Identifier"),
            one("name", "string"),
            many("network", "Reference"),
            one("ownedBy", "Reference"),
            one("period", "Period"),
            many("plan", "InsurancePlan.plan"),
            one("status", "code"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "InsurancePlan.contact",
        BACKBONE,
        &[
            one("address", "Address"),
            one("name", "HumanName"),
            one("purpose", "CodeableConcept"),
            many("telecom", "ContactPoint"),
        ],
    ),
    def(
        "InsurancePlan.coverage",
        BACKBONE,
        &[
            req_many("benefit", "InsurancePlan.coverage.benefit"),
            many("network", "Reference"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "InsurancePlan.coverage.benefit",
        BACKBONE,
        &[
            many("limit", "InsurancePlan.coverage.benefit.limit"),
            one("requirement", "string"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "InsurancePlan.coverage.benefit.limit",
        BACKBONE,
        &[one("code", "CodeableConcept"), one("value", "Quantity")],
    ),
    def(
        "InsurancePlan.plan",
        BACKBONE,
        &[
            many("coverageArea", "Reference"),
            many("generalCost", "InsurancePlan.plan.generalCost"),
            many("identifier", "Identifier"),
            many("network", "Reference"),
            many("specificCost", "InsurancePlan.plan.specificCost"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "InsurancePlan.plan.generalCost",
        BACKBONE,
        &[
            one("comment", "string"),
            one("cost", "Money"),
            one("groupSize", "positiveInt"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "InsurancePlan.plan.specificCost",
        BACKBONE,
        &[
            many("benefit", "InsurancePlan.plan.specificCost.benefit"),
            req("category", "CodeableConcept"),
        ],
    ),
    def(
        "InsurancePlan.plan.specificCost.benefit",
        BACKBONE,
        &[
            many("cost", "InsurancePlan.plan.specificCost.benefit.cost"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "InsurancePlan.plan.specificCost.benefit.cost",
        BACKBONE,
        &[
            one("applicability", "CodeableConcept"),
            many("qualifiers", "CodeableConcept"),
            req("type", "CodeableConcept"),
            one("value", "Quantity"),
        ],
    ),
    // Invoice
    def(
        "Invoice",
        DOMAIN,
        &[
            one("account", "Reference"),
            one("cancelledReason", "string"),
            one("date", "dateTime"),
            many("identifier", "Identifier"),
            one("issuer", "Reference"),
            many("lineItem", "Invoice.lineItem"),
            many("note", "Annotation"),
            many("participant", "Invoice.participant"),
            one("paymentTerms", "markdown"),
            one("recipient", "Reference"),
            req("status", "code"),
            one("subject", "Reference"),
            one("totalGross", "Money"),
            one("totalNet", "Money"),
            many("totalPriceComponent", "Invoice.lineItem.priceComponent"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "Invoice.participant",
        BACKBONE,
        &[req("actor", "Reference"), one("role", "CodeableConcept")],
    ),
    def(
        "Invoice.lineItem",
        BACKBONE,
        &[
            req("chargeItemCodeableConcept", "CodeableConcept"),
            req("chargeItemReference", "Reference"),
            many("priceComponent", "Invoice.lineItem.priceComponent"),
            one("sequence", "positiveInt"),
        ],
    ),
    def(
        "Invoice.lineItem.priceComponent",
        BACKBONE,
        &[
            one("amount", "Money"),
            one("code", "CodeableConcept"),
            one("factor", "decimal"),
            req("type", "code"),
        ],
    ),
    // Library
    def(
        "Library",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            many("contact", "ContactDetail"),
            many("content", "Attachment"),
            one("copyright", "markdown"),
            many("dataRequirement", "DataRequirement"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            one("experimental", "boolean"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            one("name", "string"),
            many("parameter", "ParameterDefinition"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            req("status", "code"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            one("subtitle", "string"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            req("type", "CodeableConcept"),
            one("url", "uri"),
            one("usage", "string"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    // Linkage
    def(
        "Linkage",
        DOMAIN,
        &[
            one("active", "boolean"),
            one("author", "Reference"),
            req_many("item", "Linkage.item"),
        ],
    ),
    def(
        "Linkage.item",
        BACKBONE,
        &[req("resource", "Reference"), req("type", "code")],
    ),
    // List
    def(
        "List",
        DOMAIN,
        &[
            one("code", "CodeableConcept"),
            one("date", "dateTime"),
            one("emptyReason", "CodeableConcept"),
            one("encounter", "Reference"),
            many("entry", "List.entry"),
            many("identifier", "Identifier"),
            req("mode", "code"),
            many("note", "Annotation"),
            one("orderedBy", "CodeableConcept"),
            one("source", "Reference"),
            req("status", "code"),
            one("subject", "Reference"),
            one("title", "string"),
        ],
    ),
    def(
        "List.entry",
        BACKBONE,
        &[
            one("date", "dateTime"),
            one("deleted", "boolean"),
            one("flag", "CodeableConcept"),
            req("item", "Reference"),
        ],
    ),
    // Location
    def(
        "Location",
        DOMAIN,
        &[
            one("address", "Address"),
            many("alias", "string"),
            one("availabilityExceptions", "string"),
            one("description", "string"),
            many("endpoint", "Reference"),
            many("hoursOfOperation", "Location.hoursOfOperation"),
            many("identifier", "Identifier"),
            one("managingOrganization", "Reference"),
            one("mode", "code"),
            one("name", "string"),
            one("operationalStatus", "Coding"),
            one("partOf", "Reference"),
            one("physicalType", "CodeableConcept"),
            one("position", "Location.position"),
            one("status", "code"),
            many("telecom", "ContactPoint"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "Location.hoursOfOperation",
        BACKBONE,
        &[
            one("allDay", "boolean"),
            one("closingTime", "time"),
            many("daysOfWeek", "code"),
            one("openingTime", "time"),
        ],
    ),
    def(
        "Location.position",
        BACKBONE,
        &[
            one("altitude", "decimal"),
            req("latitude", "decimal"),
            req("longitude", "decimal"),
        ],
    ),
    // Measure
    def(
        "Measure",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            one("clinicalRecommendationStatement", "markdown"),
            one("compositeScoring", "CodeableConcept"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            many("definition", "markdown"),
            one("description", "markdown"),
            one("disclaimer", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            one("experimental", "boolean"),
            many("group", "Measure.group"),
            one("guidance", "markdown"),
            many("identifier", "Identifier"),
            one("improvementNotation", "CodeableConcept"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            many("library", "canonical"),
            one("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            one("rateAggregation", "string"),
            one("rationale", "markdown"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            one("riskAdjustment", "string"),
            one("scoring", "CodeableConcept"),
            req("status", "code"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            one("subtitle", "string"),
            many("supplementalData", "Measure.supplementalData"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            many("type", "CodeableConcept"),
            one("url", "uri"),
            one("usage", "string"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "Measure.group",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("description", "string"),
            many("population", "Measure.group.population"),
            many("stratifier", "Measure.group.stratifier"),
        ],
    ),
    def(
        "Measure.group.population",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            req("criteria", "Expression"),
            one("description", "string"),
        ],
    ),
    def(
        "Measure.group.stratifier",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            many("component", "Measure.group.stratifier.component"),
            one("criteria", "Expression"),
            one("description", "string"),
        ],
    ),
    def(
        "Measure.group.stratifier.component",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            req("criteria", "Expression"),
            one("description", "string"),
        ],
    ),
    def(
        "Measure.supplementalData",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            req("criteria", "Expression"),
            one("description", "string"),
            many("usage", "CodeableConcept"),
        ],
    ),
    // MeasureReport
    def(
        "MeasureReport",
        DOMAIN,
        &[
            one("date", "dateTime"),
            many("evaluatedResource", "Reference"),
            many("group", "MeasureReport.group"),
            many("identifier", "Identifier"),
            one("improvementNotation", "CodeableConcept"),
            req("measure", "canonical"),
            req("period", "Period"),
            one("reporter", "Reference"),
            req("status", "code"),
            one("subject", "Reference"),
            req("type", "code"),
        ],
    ),
    def(
        "MeasureReport.group",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("measureScore", "Quantity"),
            many("population", "MeasureReport.group.population"),
            many("stratifier", "MeasureReport.group.stratifier"),
        ],
    ),
    def(
        "MeasureReport.group.population",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("count", "integer"),
            one("subjectResults", "Reference"),
        ],
    ),
    def(
        "MeasureReport.group.stratifier",
        BACKBONE,
        &[
            many("code", "CodeableConcept"),
            many("stratum", "MeasureReport.group.stratifier.stratum"),
        ],
    ),
    def(
        "MeasureReport.group.stratifier.stratum",
        BACKBONE,
        &[
            many("component", "MeasureReport.group.stratifier.stratum.component"),
            one("measureScore", "Quantity"),
            many("population", "MeasureReport.group.stratifier.stratum.population"),
            one("value", "CodeableConcept"),
        ],
    ),
    def(
        "MeasureReport.group.stratifier.stratum.component",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            req("value", "CodeableConcept"),
        ],
    ),
    def(
        "MeasureReport.group.stratifier.stratum.population",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("count", "integer"),
            one("subjectResults", "Reference"),
        ],
    ),
    // Media
    def(
        "Media",
        DOMAIN,
        &[
            many("basedOn", "Reference"),
            one("bodySite", "CodeableConcept"),
            req("content", "Attachment"),
            one("createdDateTime", "dateTime"),
            one("createdPeriod", "Period"),
            one("device", "Reference"),
            one("deviceName", "string"),
            one("duration", "decimal"),
            one("encounter", "Reference"),
            one("frames", "positiveInt"),
            one("height", "positiveInt"),
            many("identifier", "Identifier"),
            one("issued", "instant"),
            one("modality", "CodeableConcept"),
            many("note", "Annotation"),
            one("operator", "Reference"),
            many("partOf", "Reference"),
            many("reasonCode", "CodeableConcept"),
            req("status", "code"),
            one("subject", "Reference"),
            one("type", "CodeableConcept"),
            one("view", "CodeableConcept"),
            one("width", "positiveInt"),
        ],
    ),
    // Medication
    def(
        "Medication",
        DOMAIN,
        &[
            one("amount", "Ratio"),
            one("batch", "Medication.batch"),
            one("code", "CodeableConcept"),
            one("form", "CodeableConcept"),
            many("identifier", "Identifier"),
            many("ingredient", "Medication.ingredient"),
            one("manufacturer", "Reference"),
            one("status", "code"),
        ],
    ),
    def(
        "Medication.batch",
        BACKBONE,
        &[
            one("expirationDate", "dateTime"),
            one("lotNumber", "string"),
        ],
    ),
    def(
        "Medication.ingredient",
        BACKBONE,
        &[
            one("isActive", "boolean"),
            one("itemCodeableConcept", "CodeableConcept"),
            one("itemReference", "Reference"),
            one("strength", "Ratio"),
        ],
    ),
    // MedicationAdministration
    def(
        "MedicationAdministration",
        DOMAIN,
        &[
            one("category", "CodeableConcept"),
            one("context", "Reference"),
            many("device", "Reference"),
            one("dosage", "MedicationAdministration.dosage"),
            req("effectiveDateTime", "dateTime"),
            req("effectivePeriod", "Period"),
            many("eventHistory", "Reference"),
            many("identifier", "Identifier"),
            many("instantiates", "uri"),
            req("medicationCodeableConcept", "CodeableConcept"),
            req("medicationReference", "Reference"),
            many("note", "Annotation"),
            many("partOf", "Reference"),
            many("performer", "MedicationAdministration.performer"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("request", "Reference"),
            req("status", "code"),
            many("statusReason", "CodeableConcept"),
            req("subject", "Reference"),
            many("supportingInformation", "Reference"),
        ],
    ),
    def(
        "MedicationAdministration.performer",
        BACKBONE,
        &[
            req("actor", "Reference"),
            one("function", "CodeableConcept"),
        ],
    ),
    def(
        "MedicationAdministration.dosage",
        BACKBONE,
        &[
            one("dose", "Quantity"),
            one("method", "CodeableConcept"),
            one("rateQuantity", "Quantity"),
            one("rateRatio", "Ratio"),
            one("route", "CodeableConcept"),
            one("site", "CodeableConcept"),
            one("text", "string"),
        ],
    ),
    // MedicationDispense
    def(
        "MedicationDispense",
        DOMAIN,
        &[
            many("authorizingPrescription", "Reference"),
            one("category", "CodeableConcept"),
            one("context", "Reference"),
            one("daysSupply", "Quantity"),
            one("destination", "Reference"),
            many("detectedIssue", "Reference"),
            many("dosageInstruction", "Dosage"),
            many("eventHistory", "Reference"),
            many("identifier", "Identifier"),
            one("location", "Reference"),
            req("medicationCodeableConcept", "CodeableConcept"),
            req("medicationReference", "Reference"),
            many("note", "Annotation"),
            many("partOf", "Reference"),
            many("performer", "MedicationDispense.performer"),
            one("quantity", "Quantity"),
            many("receiver", "Reference"),
            req("status", "code"),
            one("statusReasonCodeableConcept", "CodeableConcept"),
            one("statusReasonReference", "Reference"),
            one("subject", "Reference"),
            one("substitution", "MedicationDispense.substitution"),
            many("supportingInformation", "Reference"),
            one("type", "CodeableConcept"),
            one("whenHandedOver", "dateTime"),
            one("whenPrepared", "dateTime"),
        ],
    ),
    def(
        "MedicationDispense.performer",
        BACKBONE,
        &[
            req("actor", "Reference"),
            one("function", "CodeableConcept"),
        ],
    ),
    def(
        "MedicationDispense.substitution",
        BACKBONE,
        &[
            many("reason", "CodeableConcept"),
            many("responsibleParty", "Reference"),
            one("type", "CodeableConcept"),
            req("wasSubstituted", "boolean"),
        ],
    ),
    // MedicationKnowledge
    def(
        "MedicationKnowledge",
        DOMAIN,
        &[
            many("administrationGuidelines", "MedicationKnowledge.administrationGuidelines"),
            one("amount", "Quantity"),
            many("associatedMedication", "Reference"),
            one("code", "CodeableConcept"),
            many("contraindication", "Reference"),
            many("cost", "MedicationKnowledge.cost"),
            one("doseForm", "CodeableConcept"),
            many("drugCharacteristic", "MedicationKnowledge.drugCharacteristic"),
            many("ingredient", "MedicationKnowledge.ingredient"),
            many("intendedRoute", "CodeableConcept"),
            many("kinetics", "MedicationKnowledge.kinetics"),
            one("manufacturer", "Reference"),
            many("medicineClassification", "MedicationKnowledge.medicineClassification"),
            many("monitoringProgram", "MedicationKnowledge.monitoringProgram"),
            many("monograph", "MedicationKnowledge.monograph"),
            one("packaging", "MedicationKnowledge.packaging"),
            one("preparationInstruction", "markdown"),
            many("productType", "CodeableConcept"),
            many("regulatory", "MedicationKnowledge.regulatory"),
            many("relatedMedicationKnowledge", "MedicationKnowledge.relatedMedicationKnowledge"),
            one("status", "code"),
            many("synonym", "string"),
        ],
    ),
    def(
        "MedicationKnowledge.relatedMedicationKnowledge",
        BACKBONE,
        &[
            req_many("reference", "Reference"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "MedicationKnowledge.monograph",
        BACKBONE,
        &[
            one("source", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "MedicationKnowledge.ingredient",
        BACKBONE,
        &[
            one("isActive", "boolean"),
            req("itemCodeableConcept", "CodeableConcept"),
            req("itemReference", "Reference"),
            one("strength", "Ratio"),
        ],
    ),
    def(
        "MedicationKnowledge.cost",
        BACKBONE,
        &[
            req("cost", "Money"),
            one("source", "string"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "MedicationKnowledge.monitoringProgram",
        BACKBONE,
        &[one("name", "string"), one("type", "CodeableConcept")],
    ),
    def(
        "MedicationKnowledge.administrationGuidelines",
        BACKBONE,
        &[
            many("dosage", "MedicationKnowledge.administrationGuidelines.dosage"),
            one("indicationCodeableConcept", "CodeableConcept"),
            one("indicationReference", "Reference"),
            many("patientCharacteristics", "MedicationKnowledge.administrationGuidelines.patientCharacteristics"),
        ],
    ),
    def(
        "MedicationKnowledge.administrationGuidelines.dosage",
        BACKBONE,
        &[
            req_many("dosage", "Dosage"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "MedicationKnowledge.administrationGuidelines.patientCharacteristics",
        BACKBONE,
        &[
            req("characteristicCodeableConcept", "CodeableConcept"),
            req("characteristicQuantity", "Quantity"),
            many("value", "string"),
        ],
    ),
    def(
        "MedicationKnowledge.medicineClassification",
        BACKBONE,
        &[
            many("classification", "CodeableConcept"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "MedicationKnowledge.packaging",
        BACKBONE,
        &[
            one("quantity", "Quantity"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "MedicationKnowledge.drugCharacteristic",
        BACKBONE,
        &[
            one("type", "CodeableConcept"),
            one("valueBase64Binary", "base64Binary"),
            one("valueCodeableConcept", "CodeableConcept"),
            one("valueQuantity", "Quantity"),
            one("valueString", "string"),
        ],
    ),
    def(
        "MedicationKnowledge.regulatory",
        BACKBONE,
        &[
            one("maxDispense", "MedicationKnowledge.regulatory.maxDispense"),
            req("regulatoryAuthority", "Reference"),
            many("schedule", "MedicationKnowledge.regulatory.schedule"),
            many("substitution", "MedicationKnowledge.regulatory.substitution"),
        ],
    ),
    def(
        "MedicationKnowledge.regulatory.substitution",
        BACKBONE,
        &[req("allowed", "boolean"), req("type", "CodeableConcept")],
    ),
    def(
        "MedicationKnowledge.regulatory.schedule",
        BACKBONE,
        &[req("schedule", "CodeableConcept")],
    ),
    def(
        "MedicationKnowledge.regulatory.maxDispense",
        BACKBONE,
        &[one("period", "Duration"), req("quantity", "Quantity")],
    ),
    def(
        "MedicationKnowledge.kinetics",
        BACKBONE,
        &[
            many("areaUnderCurve", "Quantity"),
            one("halfLifePeriod", "Duration"),
            many("lethalDose50", "Quantity"),
        ],
    ),
    // MedicationRequest
    def(
        "MedicationRequest",
        DOMAIN,
        &[
            one("authoredOn", "dateTime"),
            many("basedOn", "Reference"),
            many("category", "CodeableConcept"),
            one("courseOfTherapyType", "CodeableConcept"),
            many("detectedIssue", "Reference"),
            one("dispenseRequest", "MedicationRequest.dispenseRequest"),
            one("doNotPerform", "boolean"),
            many("dosageInstruction", "Dosage"),
            one("encounter", "Reference"),
            many("eventHistory", "Reference"),
            one("groupIdentifier", "Identifier"),
            many("identifier", "Identifier"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            many("insurance", "Reference"),
            req("intent", "code"),
            one("medicationCodeableConcept", "CodeableConcept"),
            one("medicationReference", "Reference"),
            many("note", "Annotation"),
            one("performer", "Reference"),
            one("performerType", "CodeableConcept"),
            one("priorPrescription", "Reference"),
            one("priority", "code"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("recorder", "Reference"),
            one("reportedBoolean", "boolean"),
            one("reportedReference", "Reference"),
            one("requester", "Reference"),
            req("status", "code"),
            one("statusReason", "CodeableConcept"),
            req("subject", "Reference"),
            one("substitution", "MedicationRequest.substitution"),
            many("supportingInformation", "Reference"),
        ],
    ),
    def(
        "MedicationRequest.dispenseRequest",
        BACKBONE,
        &[
            one("dispenseInterval", "Duration"),
            one("expectedSupplyDuration", "Duration"),
            one("initialFill", "MedicationRequest.dispenseRequest.initialFill"),
            one("numberOfRepeatsAllowed", "unsignedInt"),
            one("performer", "Reference"),
            one("quantity", "Quantity"),
            one("validityPeriod", "Period"),
        ],
    ),
    def(
        "MedicationRequest.dispenseRequest.initialFill",
        BACKBONE,
        &[one("duration", "Duration"), one("quantity", "Quantity")],
    ),
    def(
        "MedicationRequest.substitution",
        BACKBONE,
        &[
            one("allowedBoolean", "boolean"),
            one("allowedCodeableConcept", "CodeableConcept"),
            one("reason", "CodeableConcept"),
        ],
    ),
    // MedicationStatement
    def(
        "MedicationStatement",
        DOMAIN,
        &[
            many("basedOn", "Reference"),
            one("category", "CodeableConcept"),
            one("context", "Reference"),
            one("dateAsserted", "dateTime"),
            many("derivedFrom", "Reference"),
            many("dosage", "Dosage"),
            one("effectiveDateTime", "dateTime"),
            one("effectivePeriod", "Period"),
            many("identifier", "Identifier"),
            one("informationSource", "Reference"),
            req("medicationCodeableConcept", "CodeableConcept"),
            req("medicationReference", "Reference"),
            many("note", "Annotation"),
            many("partOf", "Reference"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            req("status", "code"),
            many("statusReason", "CodeableConcept"),
            req("subject", "Reference"),
        ],
    ),
    // MedicinalProduct
    def(
        "MedicinalProduct",
        DOMAIN,
        &[
            one("additionalMonitoringIndicator", "CodeableConcept"),
            many("attachedDocument", "Reference"),
            many("clinicalTrial", "Reference"),
            one("combinedPharmaceuticalDoseForm", "CodeableConcept"),
            many("contact", "Reference"),
            many("crossReference", "Identifier"),
            one("domain", "Coding"),
            many("identifier", "Identifier"),
            one("legalStatusOfSupply", "CodeableConcept"),
            many("manufacturingBusinessOperation", "MedicinalProduct.manufacturingBusinessOperation"),
            many("marketingStatus", "MarketingStatus"),
            many("masterFile", "Reference"),
            req_many("name", "MedicinalProduct.name"),
            many("packagedMedicinalProduct", "Reference"),
            one("paediatricUseIndicator", "CodeableConcept"),
            many("pharmaceuticalProduct", "Reference"),
            many("productClassification", "CodeableConcept"),
            many("specialDesignation", "MedicinalProduct.specialDesignation"),
            many("specialMeasures", "string"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "MedicinalProduct.name",
        BACKBONE,
        &[
            many("countryLanguage", "MedicinalProduct.name.countryLanguage"),
            many("namePart", "MedicinalProduct.name.namePart"),
            req("productName", "string"),
        ],
    ),
    def(
        "MedicinalProduct.name.namePart",
        BACKBONE,
        &[req("part", "string"), req("type", "Coding")],
    ),
    def(
        "MedicinalProduct.name.countryLanguage",
        BACKBONE,
        &[
            req("country", "CodeableConcept"),
            one("jurisdiction", "CodeableConcept"),
            req("language", "CodeableConcept"),
        ],
    ),
    def(
        "MedicinalProduct.manufacturingBusinessOperation",
        BACKBONE,
        &[
            one("authorisationReferenceNumber", "Identifier"),
            one("confidentialityIndicator", "CodeableConcept"),
            one("effectiveDate", "dateTime"),
            many("manufacturer", "Reference"),
            one("operationType", "CodeableConcept"),
            one("regulator", "Reference"),
        ],
    ),
    def(
        "MedicinalProduct.specialDesignation",
        BACKBONE,
        &[
            one("date", "dateTime"),
            many("identifier", "Identifier"),
            one("indicationCodeableConcept", "CodeableConcept"),
            one("indicationReference", "Reference"),
            one("intendedUse", "CodeableConcept"),
            one("species", "CodeableConcept"),
            one("status", "CodeableConcept"),
            one("type", "CodeableConcept"),
        ],
    ),
    // MedicinalProductAuthorization
    def(
        "MedicinalProductAuthorization",
        DOMAIN,
        &[
            many("country", "CodeableConcept"),
            one("dataExclusivityPeriod", "Period"),
            one("dateOfFirstAuthorization", "dateTime"),
            one("holder", "Reference"),
            many("identifier", "Identifier"),
            one("internationalBirthDate", "dateTime"),
            many("jurisdiction", "CodeableConcept"),
            many("jurisdictionalAuthorization", "MedicinalProductAuthorization.jurisdictionalAuthorization"),
            one("legalBasis", "CodeableConcept"),
            one("procedure", "MedicinalProductAuthorization.procedure"),
            one("regulator", "Reference"),
            one("restoreDate", "dateTime"),
            one("status", "CodeableConcept"),
            one("statusDate", "dateTime"),
            one("subject", "Reference"),
            one("validityPeriod", "Period"),
        ],
    ),
    def(
        "MedicinalProductAuthorization.jurisdictionalAuthorization",
        BACKBONE,
        &[
            one("country", "CodeableConcept"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("legalStatusOfSupply", "CodeableConcept"),
            one("validityPeriod", "Period"),
        ],
    ),
    def(
        "MedicinalProductAuthorization.procedure",
        BACKBONE,
        &[
            many("application", "MedicinalProductAuthorization.procedure"),
            one("dateDateTime", "dateTime"),
            one("datePeriod", "Period"),
            one("identifier", "Identifier"),
            req("type", "CodeableConcept"),
        ],
    ),
    // MedicinalProductContraindication
    def(
        "MedicinalProductContraindication",
        DOMAIN,
        &[
            many("comorbidity", "CodeableConcept"),
            one("disease", "CodeableConcept"),
            one("diseaseStatus", "CodeableConcept"),
            many("otherTherapy", "MedicinalProductContraindication.otherTherapy"),
            many("population", "Population"),
            many("subject", "Reference"),
            many("therapeuticIndication", "Reference"),
        ],
    ),
    def(
        "MedicinalProductContraindication.otherTherapy",
        BACKBONE,
        &[
            req("medicationCodeableConcept", "CodeableConcept"),
            req("medicationReference", "Reference"),
            req("therapyRelationshipType", "CodeableConcept"),
        ],
    ),
    // MedicinalProductIndication
    def(
        "MedicinalProductIndication",
        DOMAIN,
        &[
            many("comorbidity", "CodeableConcept"),
            one("diseaseStatus", "CodeableConcept"),
            one("diseaseSymptomProcedure", "CodeableConcept"),
            one("duration", "Quantity"),
            one("intendedEffect", "CodeableConcept"),
            many("otherTherapy", "MedicinalProductIndication.otherTherapy"),
            many("population", "Population"),
            many("subject", "Reference"),
            many("undesirableEffect", "Reference"),
        ],
    ),
    def(
        "MedicinalProductIndication.otherTherapy",
        BACKBONE,
        &[
            req("medicationCodeableConcept", "CodeableConcept"),
            req("medicationReference", "Reference"),
            req("therapyRelationshipType", "CodeableConcept"),
        ],
    ),
    // MedicinalProductIngredient
    def(
        "MedicinalProductIngredient",
        DOMAIN,
        &[
            one("allergenicIndicator", "boolean"),
            one("identifier", "Identifier"),
            many("manufacturer", "Reference"),
            req("role", "CodeableConcept"),
            many("specifiedSubstance", "MedicinalProductIngredient.specifiedSubstance"),
            one("substance", "MedicinalProductIngredient.substance"),
        ],
    ),
    def(
        "MedicinalProductIngredient.specifiedSubstance",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            one("confidentiality", "CodeableConcept"),
            req("group", "CodeableConcept"),
            many("strength", "MedicinalProductIngredient.specifiedSubstance.strength"),
        ],
    ),
    def(
        "MedicinalProductIngredient.specifiedSubstance.strength",
        BACKBONE,
        &[
            one("concentration", "Ratio"),
            one("concentrationLowLimit", "Ratio"),
            many("country", "CodeableConcept"),
            one("measurementPoint", "string"),
            req("presentation", "Ratio"),
            one("presentationLowLimit", "Ratio"),
            many("referenceStrength", "MedicinalProductIngredient.specifiedSubstance.strength.referenceStrength"),
        ],
    ),
    def(
        "MedicinalProductIngredient.specifiedSubstance.strength.referenceStrength",
        BACKBONE,
        &[
            many("country", "CodeableConcept"),
            one("measurementPoint", "string"),
            req("strength", "Ratio"),
            one("strengthLowLimit", "Ratio"),
            one("substance", "CodeableConcept"),
        ],
    ),
    def(
        "MedicinalProductIngredient.substance",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            many("strength", "MedicinalProductIngredient.specifiedSubstance.strength"),
        ],
    ),
    // MedicinalProductInteraction
    def(
        "MedicinalProductInteraction",
        DOMAIN,
        &[
            one("description", "string"),
            one("effect", "CodeableConcept"),
            one("incidence", "CodeableConcept"),
            many("interactant", "MedicinalProductInteraction.interactant"),
            one("management", "CodeableConcept"),
            many("subject", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "MedicinalProductInteraction.interactant",
        BACKBONE,
        &[
            req("itemCodeableConcept", "CodeableConcept"),
            req("itemReference", "Reference"),
        ],
    ),
    // MedicinalProductManufactured
    def(
        "MedicinalProductManufactured",
        DOMAIN,
        &[
            many("ingredient", "Reference"),
            req("manufacturedDoseForm", "CodeableConcept"),
            many("manufacturer", "Reference"),
            many("otherCharacteristics", "CodeableConcept"),
            one("physicalCharacteristics", "ProdCharacteristic"),
            req("quantity", "Quantity"),
            one("unitOfPresentation", "CodeableConcept"),
        ],
    ),
    // MedicinalProductPackaged
    def(
        "MedicinalProductPackaged",
        DOMAIN,
        &[
            many("batchIdentifier", "MedicinalProductPackaged.batchIdentifier"),
            one("description", "string"),
            many("identifier", "Identifier"),
            one("legalStatusOfSupply", "CodeableConcept"),
            many("manufacturer", "Reference"),
            one("marketingAuthorization", "Reference"),
            many("marketingStatus", "MarketingStatus"),
            req_many("packageItem", "MedicinalProductPackaged.packageItem"),
            many("subject", "Reference"),
        ],
    ),
    def(
        "MedicinalProductPackaged.batchIdentifier",
        BACKBONE,
        &[
            one("immediatePackaging", "Identifier"),
            req("outerPackaging", "Identifier"),
        ],
    ),
    def(
        "MedicinalProductPackaged.packageItem",
        BACKBONE,
        &[
            many("alternateMaterial", "CodeableConcept"),
            many("device", "Reference"),
            many("identifier", "Identifier"),
            many("manufacturedItem", "Reference"),
            many("manufacturer", "Reference"),
            many("material", "CodeableConcept"),
            many("otherCharacteristics", "CodeableConcept"),
            many("packageItem", "MedicinalProductPackaged.packageItem"),
            one("physicalCharacteristics", "ProdCharacteristic"),
            req("quantity", "Quantity"),
            many("shelfLifeStorage", "ProductShelfLife"),
            req("type", "CodeableConcept"),
        ],
    ),
    // MedicinalProductPharmaceutical
    def(
        "MedicinalProductPharmaceutical",
        DOMAIN,
        &[
            req("administrableDoseForm", "CodeableConcept"),
            many("characteristics", "MedicinalProductPharmaceutical.characteristics"),
            many("device", "Reference"),
            many("identifier", "Identifier"),
            many("ingredient", "Reference"),
            req_many("routeOfAdministration", "MedicinalProductPharmaceutical.routeOfAdministration"),
            one("unitOfPresentation", "CodeableConcept"),
        ],
    ),
    def(
        "MedicinalProductPharmaceutical.characteristics",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            one("status", "CodeableConcept"),
        ],
    ),
    def(
        "MedicinalProductPharmaceutical.routeOfAdministration",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            one("firstDose", "Quantity"),
            one("maxDosePerDay", "Quantity"),
            one("maxDosePerTreatmentPeriod", "Ratio"),
            one("maxSingleDose", "Quantity"),
            one("maxTreatmentPeriod", "Duration"),
            many("targetSpecies", "MedicinalProductPharmaceutical.routeOfAdministration.targetSpecies"),
        ],
    ),
    def(
        "MedicinalProductPharmaceutical.routeOfAdministration.targetSpecies",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            many("withdrawalPeriod", "MedicinalProductPharmaceutical.routeOfAdministration.targetSpecies.withdrawalPeriod"),
        ],
    ),
    def(
        "MedicinalProductPharmaceutical.routeOfAdministration.targetSpecies.withdrawalPeriod",
        BACKBONE,
        &[
            one("supportingInformation", "string"),
            req("tissue", "CodeableConcept"),
            req("value", "Quantity"),
        ],
    ),
    // MedicinalProductUndesirableEffect
    def(
        "MedicinalProductUndesirableEffect",
        DOMAIN,
        &[
            one("classification", "CodeableConcept"),
            one("frequencyOfOccurrence", "CodeableConcept"),
            many("population", "Population"),
            many("subject", "Reference"),
            one("symptomConditionEffect", "CodeableConcept"),
        ],
    ),
    // MessageDefinition
    def(
        "MessageDefinition",
        DOMAIN,
        &[
            many("allowedResponse", "MessageDefinition.allowedResponse"),
            one("base", "canonical"),
            one("category", "code"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            req("date", "dateTime"),
            one("description", "markdown"),
            req("eventCoding", "Coding"),
            req("eventUri", "uri"),
            one("experimental", "boolean"),
            many("focus", "MessageDefinition.focus"),
            many("graph", "canonical"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("name", "string"),
            many("parent", "canonical"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("replaces", "canonical"),
            one("responseRequired", "code"),
            req("status", "code"),
            one("title", "string"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "MessageDefinition.focus",
        BACKBONE,
        &[
            req("code", "code"),
            one("max", "string"),
            req("min", "unsignedInt"),
            one("profile", "canonical"),
        ],
    ),
    def(
        "MessageDefinition.allowedResponse",
        BACKBONE,
        &[req("message", "canonical"), one("situation", "markdown")],
    ),
    // MessageHeader
    def(
        "MessageHeader",
        DOMAIN,
        &[
            one("author", "Reference"),
            one("definition", "canonical"),
            many("destination", "MessageHeader.destination"),
            one("enterer", "Reference"),
            req("eventCoding", "Coding"),
            req("eventUri", "uri"),
            many("focus", "Reference"),
            one("reason", "CodeableConcept"),
            one("response", "MessageHeader.response"),
            one("responsible", "Reference"),
            one("sender", "Reference"),
            req("source", "MessageHeader.source"),
        ],
    ),
    def(
        "MessageHeader.destination",
        BACKBONE,
        &[
            req("endpoint", "url"),
            one("name", "string"),
            one("receiver", "Reference"),
            one("target", "Reference"),
        ],
    ),
    def(
        "MessageHeader.source",
        BACKBONE,
        &[
            one("contact", "ContactPoint"),
            req("endpoint", "url"),
            one("name", "string"),
            one("software", "string"),
            one("version", "string"),
        ],
    ),
    def(
        "MessageHeader.response",
        BACKBONE,
        &[
            req("code", "code"),
            one("details", "Reference"),
            req("identifier", "id"),
        ],
    ),
    // MolecularSequence
    def(
        "MolecularSequence",
        DOMAIN,
        &[
            req("coordinateSystem", "integer"),
            one("device", "Reference"),
            many("identifier", "Identifier"),
            one("observedSeq", "string"),
            one("patient", "Reference"),
            one("performer", "Reference"),
            many("pointer", "Reference"),
            many("quality", "MolecularSequence.quality"),
            one("quantity", "Quantity"),
            one("readCoverage", "integer"),
            one("referenceSeq", "MolecularSequence.referenceSeq"),
            many("repository", "MolecularSequence.repository"),
            one("specimen", "Reference"),
            many("structureVariant", "MolecularSequence.structureVariant"),
            one("type", "code"),
            many("variant", "MolecularSequence.variant"),
        ],
    ),
    def(
        "MolecularSequence.referenceSeq",
        BACKBONE,
        &[
            one("chromosome", "CodeableConcept"),
            one("genomeBuild", "string"),
            one("orientation", "code"),
            one("referenceSeqId", "CodeableConcept"),
            one("referenceSeqPointer", "Reference"),
            one("referenceSeqString", "string"),
            one("strand", "code"),
            one("windowEnd", "integer"),
            one("windowStart", "integer"),
        ],
    ),
    def(
        "MolecularSequence.variant",
        BACKBONE,
        &[
            one("cigar", "string"),
            one("end", "integer"),
            one("observedAllele", "string"),
            one("referenceAllele", "string"),
            one("start", "integer"),
            one("variantPointer", "Reference"),
        ],
    ),
    def(
        "MolecularSequence.quality",
        BACKBONE,
        &[
            one("end", "integer"),
            one("fScore", "decimal"),
            one("gtFP", "decimal"),
            one("method", "CodeableConcept"),
            one("precision", "decimal"),
            one("queryFP", "decimal"),
            one("queryTP", "decimal"),
            one("recall", "decimal"),
            one("roc", "MolecularSequence.quality.roc"),
            one("score", "Quantity"),
            one("standardSequence", "CodeableConcept"),
            one("start", "integer"),
            one("truthFN", "decimal"),
            one("truthTP", "decimal"),
            req("type", "code"),
        ],
    ),
    def(
        "MolecularSequence.quality.roc",
        BACKBONE,
        &[
            many("fMeasure", "decimal"),
            many("numFN", "integer"),
            many("numFP", "integer"),
            many("numTP", "integer"),
            many("precision", "decimal"),
            many("score", "integer"),
            many("sensitivity", "decimal"),
        ],
    ),
    def(
        "MolecularSequence.repository",
        BACKBONE,
        &[
            one("datasetId", "string"),
            one("name", "string"),
            one("readsetId", "string"),
            req("type", "code"),
            one("url", "uri"),
            one("variantsetId", "string"),
        ],
    ),
    def(
        "MolecularSequence.structureVariant",
        BACKBONE,
        &[
            one("exact", "boolean"),
            one("inner", "MolecularSequence.structureVariant.inner"),
            one("length", "integer"),
            one("outer", "MolecularSequence.structureVariant.outer"),
            one("variantType", "CodeableConcept"),
        ],
    ),
    def(
        "MolecularSequence.structureVariant.outer",
        BACKBONE,
        &[one("end", "integer"), one("start", "integer")],
    ),
    def(
        "MolecularSequence.structureVariant.inner",
        BACKBONE,
        &[one("end", "integer"), one("start", "integer")],
    ),
    // NamingSystem
    def(
        "NamingSystem",
        DOMAIN,
        &[
            many("contact", "ContactDetail"),
            req("date", "dateTime"),
            one("description", "markdown"),
            many("jurisdiction", "CodeableConcept"),
            req("kind", "code"),
            req("name", "string"),
            one("publisher", "string"),
            one("responsible", "string"),
            req("status", "code"),
            one("type", "CodeableConcept"),
            req_many("uniqueId", "NamingSystem.uniqueId"),
            one("usage", "string"),
            many("useContext", "UsageContext"),
        ],
    ),
    def(
        "NamingSystem.uniqueId",
        BACKBONE,
        &[
            one("comment", "string"),
            one("period", "Period"),
            one("preferred", "boolean"),
            req("type", "code"),
            req("value", "string"),
        ],
    ),
    // NutritionOrder
    def(
        "NutritionOrder",
        DOMAIN,
        &[
            many("allergyIntolerance", "Reference"),
            req("dateTime", "dateTime"),
            one("encounter", "Reference"),
            one("enteralFormula", "NutritionOrder.enteralFormula"),
            many("excludeFoodModifier", "CodeableConcept"),
            many("foodPreferenceModifier", "CodeableConcept"),
            many("identifier", "Identifier"),
            many("instantiates", "uri"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            req("intent", "code"),
            many("note", "Annotation"),
            one("oralDiet", "NutritionOrder.oralDiet"),
            one("orderer", "Reference"),
            req("patient", "Reference"),
            req("status", "code"),
            many("supplement", "NutritionOrder.supplement"),
        ],
    ),
    def(
        "NutritionOrder.oralDiet",
        BACKBONE,
        &[
            many("fluidConsistencyType", "CodeableConcept"),
            one("instruction", "string"),
            many("nutrient", "NutritionOrder.oralDiet.nutrient"),
            many("schedule", "Timing"),
            many("texture", "NutritionOrder.oralDiet.texture"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "NutritionOrder.oralDiet.nutrient",
        BACKBONE,
        &[
            one("amount", "Quantity"),
            one("modifier", "CodeableConcept"),
        ],
    ),
    def(
        "NutritionOrder.oralDiet.texture",
        BACKBONE,
        &[
            one("foodType", "CodeableConcept"),
            one("modifier", "CodeableConcept"),
        ],
    ),
    def(
        "NutritionOrder.supplement",
        BACKBONE,
        &[
            one("instruction", "string"),
            one("productName", "string"),
            one("quantity", "Quantity"),
            many("schedule", "Timing"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "NutritionOrder.enteralFormula",
        BACKBONE,
        &[
            one("additiveProductName", "string"),
            one("additiveType", "CodeableConcept"),
            many("administration", "NutritionOrder.enteralFormula.administration"),
            one("administrationInstruction", "string"),
            one("baseFormulaProductName", "string"),
            one("baseFormulaType", "CodeableConcept"),
            one("caloricDensity", "Quantity"),
            one("maxVolumeToDeliver", "Quantity"),
            one("routeofAdministration", "CodeableConcept"),
        ],
    ),
    def(
        "NutritionOrder.enteralFormula.administration",
        BACKBONE,
        &[
            one("quantity", "Quantity"),
            one("rateQuantity", "Quantity"),
            one("rateRatio", "Ratio"),
            one("schedule", "Timing"),
        ],
    ),
    // Observation
    def(
        "Observation",
        DOMAIN,
        &[
            many("basedOn", "Reference"),
            one("bodySite", "CodeableConcept"),
            many("category", "CodeableConcept"),
            req("code", "CodeableConcept"),
            many("component", "Observation.component"),
            one("dataAbsentReason", "CodeableConcept"),
            many("derivedFrom", "Reference"),
            one("device", "Reference"),
            one("effectiveDateTime", "dateTime"),
            one("effectiveInstant", "instant"),
            one("effectivePeriod", "Period"),
            one("effectiveTiming", "Timing"),
            one("encounter", "Reference"),
            many("focus", "Reference"),
            many("hasMember", "Reference"),
            many("identifier", "Identifier"),
            many("interpretation", "CodeableConcept"),
            one("issued", "instant"),
            one("method", "CodeableConcept"),
            many("note", "Annotation"),
            many("partOf", "Reference"),
            many("performer", "Reference"),
            many("referenceRange", "Observation.referenceRange"),
            one("specimen", "Reference"),
            req("status", "code"),
            one("subject", "Reference"),
            one("valueBoolean", "boolean"),
            one("valueCodeableConcept", "CodeableConcept"),
            one("valueDateTime", "dateTime"),
            one("valueInteger", "integer"),
            one("valuePeriod", "Period"),
            one("valueQuantity", "Quantity"),
            one("valueRange", "Range"),
            one("valueRatio", "Ratio"),
            one("valueSampledData", "SampledData"),
            one("valueString", "string"),
            one("valueTime", "time"),
        ],
    ),
    def(
        "Observation.component",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            one("dataAbsentReason", "CodeableConcept"),
            many("interpretation", "CodeableConcept"),
            many("referenceRange", "Observation.referenceRange"),
            one("valueBoolean", "boolean"),
            one("valueCodeableConcept", "CodeableConcept"),
            one("valueDateTime", "dateTime"),
            one("valueInteger", "integer"),
            one("valuePeriod", "Period"),
            one("valueQuantity", "Quantity"),
            one("valueRange", "Range"),
            one("valueRatio", "Ratio"),
            one("valueSampledData", "SampledData"),
            one("valueString", "string"),
            one("valueTime", "time"),
        ],
    ),
    def(
        "Observation.referenceRange",
        BACKBONE,
        &[
            one("age", "Range"),
            many("appliesTo", "CodeableConcept"),
            one("high", "Quantity"),
            one("low", "Quantity"),
            one("text", "string"),
            one("type", "CodeableConcept"),
        ],
    ),
    // ObservationDefinition
    def(
        "ObservationDefinition",
        DOMAIN,
        &[
            one("abnormalCodedValueSet", "Reference"),
            many("category", "CodeableConcept"),
            req("code", "CodeableConcept"),
            one("criticalCodedValueSet", "Reference"),
            many("identifier", "Identifier"),
            one("method", "CodeableConcept"),
            one("multipleResultsAllowed", "boolean"),
            one("normalCodedValueSet", "Reference"),
            many("permittedDataType", "code"),
            one("preferredReportName", "string"),
            many("qualifiedInterval", "ObservationDefinition.qualifiedInterval"),
            one("quantitativeDetails", "ObservationDefinition.quantitativeDetails"),
            one("validCodedValueSet", "Reference"),
        ],
    ),
    def(
        "ObservationDefinition.quantitativeDetails",
        BACKBONE,
        &[
            one("conversionFactor", "decimal"),
            one("customaryUnit", "CodeableConcept"),
            one("decimalPrecision", "integer"),
            one("unit", "CodeableConcept"),
        ],
    ),
    def(
        "ObservationDefinition.qualifiedInterval",
        BACKBONE,
        &[
            one("age", "Range"),
            many("appliesTo", "CodeableConcept"),
            one("category", "code"),
            one("condition", "string"),
            one("context", "CodeableConcept"),
            one("gender", "code"),
            one("gestationalAge", "Range"),
            one("range", "Range"),
        ],
    ),
    // OperationDefinition
    def(
        "OperationDefinition",
        DOMAIN,
        &[
            one("affectsState", "boolean"),
            one("base", "canonical"),
            req("code", "code"),
            one("comment", "markdown"),
            many("contact", "ContactDetail"),
            one("date", "dateTime"),
            one("description", "markdown"),
            one("experimental", "boolean"),
            one("inputProfile", "canonical"),
            req("instance", "boolean"),
            many("jurisdiction", "CodeableConcept"),
            req("kind", "code"),
            req("name", "string"),
            one("outputProfile", "canonical"),
            many("overload", "OperationDefinition.overload"),
            many("parameter", "OperationDefinition.parameter"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("resource", "code"),
            req("status", "code"),
            req("system", "boolean"),
            one("title", "string"),
            req("type", "boolean"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "OperationDefinition.parameter",
        BACKBONE,
        &[
            one("binding", "OperationDefinition.parameter.binding"),
            one("documentation", "string"),
            req("max", "string"),
            req("min", "integer"),
            req("name", "code"),
            many("part", "OperationDefinition.parameter"),
            many("referencedFrom", "OperationDefinition.parameter.referencedFrom"),
            one("searchType", "code"),
            many("targetProfile", "canonical"),
            one("type", "code"),
            req("use", "code"),
        ],
    ),
    def(
        "OperationDefinition.parameter.binding",
        BACKBONE,
        &[req("strength", "code"), req("valueSet", "canonical")],
    ),
    def(
        "OperationDefinition.parameter.referencedFrom",
        BACKBONE,
        &[req("source", "string"), one("sourceId", "string")],
    ),
    def(
        "OperationDefinition.overload",
        BACKBONE,
        &[one("comment", "string"), many("parameterName", "string")],
    ),
    // OperationOutcome
    def(
        "OperationOutcome",
        DOMAIN,
        &[req_many("issue", "OperationOutcome.issue")],
    ),
    def(
        "OperationOutcome.issue",
        BACKBONE,
        &[
            req("code", "code"),
            one("details", "CodeableConcept"),
            one("diagnostics", "string"),
            many("expression", "string"),
            many("location", "string"),
            req("severity", "code"),
        ],
    ),
    // Organization
    def(
        "Organization",
        DOMAIN,
        &[
            one("active", "boolean"),
            many("address", "Address"),
            many("alias", "string"),
            many("contact", "Organization.contact"),
            many("endpoint", "Reference"),
            many("identifier", "Identifier"),
            one("name", "string"),
            one("partOf", "Reference"),
            many("telecom", "ContactPoint"),
            many("type", "CodeableConcept"),
        ],
    ),
    def(
        "Organization.contact",
        BACKBONE,
        &[
            one("address", "Address"),
            one("name", "HumanName"),
            one("purpose", "CodeableConcept"),
            many("telecom", "ContactPoint"),
        ],
    ),
    // OrganizationAffiliation
    def(
        "OrganizationAffiliation",
        DOMAIN,
        &[
            one("active", "boolean"),
            many("code", "CodeableConcept"),
            many("endpoint", "Reference"),
            many("healthcareService", "Reference"),
            many("identifier", "Identifier"),
            many("location", "Reference"),
            many("network", "Reference"),
            one("organization", "Reference"),
            one("participatingOrganization", "Reference"),
            one("period", "Period"),
            many("specialty", "CodeableConcept"),
            many("telecom", "ContactPoint"),
        ],
    ),
    // Parameters
    def(
        "Parameters",
        Some("Resource"),
        &[many("parameter", "Parameters.parameter")],
    ),
    def(
        "Parameters.parameter",
        BACKBONE,
        &[
            req("name", "string"),
            many("part", "Parameters.parameter"),
            one("resource", "Resource"),
            one("valueAddress", "Address"),
            one("valueAge", "Age"),
            one("valueAnnotation", "Annotation"),
            one("valueAttachment", "Attachment"),
            one("valueBase64Binary", "base64Binary"),
            one("valueBoolean", "boolean"),
            one("valueCanonical", "canonical"),
            one("valueCode", "code"),
            one("valueCodeableConcept", "CodeableConcept"),
            one("valueCoding", "Coding"),
            one("valueContactDetail", "ContactDetail"),
            one("valueContactPoint", "ContactPoint"),
            one("valueContributor", "Contributor"),
            one("valueCount", "Count"),
            one("valueDataRequirement", "DataRequirement"),
            one("valueDate", "date"),
            one("valueDateTime", "dateTime"),
            one("valueDecimal", "decimal"),
            one("valueDistance", "Distance"),
            one("valueDosage", "Dosage"),
            one("valueDuration", "Duration"),
            one("valueExpression", "Expression"),
            one("valueHumanName", "HumanName"),
            one("valueId", "id"),
            one("valueIdentifier", "Identifier"),
            one("valueInstant", "instant"),
            one("valueInteger", "integer"),
            one("valueMarkdown", "markdown"),
            one("valueMeta", "Meta"),
            one("valueMoney", "Money"),
            one("valueOid", "oid"),
            one("valueParameterDefinition", "ParameterDefinition"),
            one("valuePeriod", "Period"),
            one("valuePositiveInt", "positiveInt"),
            one("valueQuantity", "Quantity"),
            one("valueRange", "Range"),
            one("valueRatio", "Ratio"),
            one("valueReference", "Reference"),
            one("valueRelatedArtifact", "RelatedArtifact"),
            one("valueSampledData", "SampledData"),
            one("valueSignature", "Signature"),
            one("valueString", "string"),
            one("valueTime", "time"),
            one("valueTiming", "Timing"),
            one("valueTriggerDefinition", "TriggerDefinition"),
            one("valueUnsignedInt", "unsignedInt"),
            one("valueUri", "uri"),
            one("valueUrl", "url"),
            one("valueUsageContext", "UsageContext"),
            one("valueUuid", "uuid"),
        ],
    ),
    // Patient
    def(
        "Patient",
        DOMAIN,
        &[
            one("active", "boolean"),
            many("address", "Address"),
            one("birthDate", "date"),
            many("communication", "Patient.communication"),
            many("contact", "Patient.contact"),
            one("deceasedBoolean", "boolean"),
            one("deceasedDateTime", "dateTime"),
            one("gender", "code"),
            many("generalPractitioner", "Reference"),
            many("identifier", "Identifier"),
            many("link", "Patient.link"),
            one("managingOrganization", "Reference"),
            one("maritalStatus", "CodeableConcept"),
            one("multipleBirthBoolean", "boolean"),
            one("multipleBirthInteger", "integer"),
            many("name", "HumanName"),
            many("photo", "Attachment"),
            many("telecom", "ContactPoint"),
        ],
    ),
    def(
        "Patient.communication",
        BACKBONE,
        &[
            req("language", "CodeableConcept"),
            one("preferred", "boolean"),
        ],
    ),
    def(
        "Patient.contact",
        BACKBONE,
        &[
            one("address", "Address"),
            one("gender", "code"),
            one("name", "HumanName"),
            one("organization", "Reference"),
            one("period", "Period"),
            many("relationship", "CodeableConcept"),
            many("telecom", "ContactPoint"),
        ],
    ),
    def(
        "Patient.link",
        BACKBONE,
        &[req("other", "Reference"), req("type", "code")],
    ),
    // PaymentNotice
    def(
        "PaymentNotice",
        DOMAIN,
        &[
            req("amount", "Money"),
            req("created", "dateTime"),
            many("identifier", "Identifier"),
            one("payee", "Reference"),
            req("payment", "Reference"),
            one("paymentDate", "date"),
            one("paymentStatus", "CodeableConcept"),
            one("provider", "Reference"),
            req("recipient", "Reference"),
            one("request", "Reference"),
            one("response", "Reference"),
            req("status", "code"),
        ],
    ),
    // PaymentReconciliation
    def(
        "PaymentReconciliation",
        DOMAIN,
        &[
            req("created", "dateTime"),
            many("detail", "PaymentReconciliation.detail"),
            one("disposition", "string"),
            one("formCode", "CodeableConcept"),
            many("identifier", "Identifier"),
            one("outcome", "code"),
            req("paymentAmount", "Money"),
            req("paymentDate", "date"),
            one("paymentIdentifier", "Identifier"),
            one("paymentIssuer", "Reference"),
            one("period", "Period"),
            many("processNote", "PaymentReconciliation.processNote"),
            one("request", "Reference"),
            one("requestor", "Reference"),
            req("status", "code"),
        ],
    ),
    def(
        "PaymentReconciliation.detail",
        BACKBONE,
        &[
            one("amount", "Money"),
            one("date", "date"),
            one("identifier", "Identifier"),
            one("payee", "Reference"),
            one("predecessor", "Identifier"),
            one("request", "Reference"),
            one("response", "Reference"),
            one("responsible", "Reference"),
            one("submitter", "Reference"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "PaymentReconciliation.processNote",
        BACKBONE,
        &[one("text", "string"), one("type", "code")],
    ),
    // Person
    def(
        "Person",
        DOMAIN,
        &[
            one("active", "boolean"),
            many("address", "Address"),
            one("birthDate", "date"),
            one("gender", "code"),
            many("identifier", "Identifier"),
            many("link", "Person.link"),
            one("managingOrganization", "Reference"),
            many("name", "HumanName"),
            one("photo", "Attachment"),
            many("telecom", "ContactPoint"),
        ],
    ),
    def(
        "Person.link",
        BACKBONE,
        &[one("assurance", "code"), req("target", "Reference")],
    ),
    // PlanDefinition
    def(
        "PlanDefinition",
        DOMAIN,
        &[
            many("action", "PlanDefinition.action"),
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            one("experimental", "boolean"),
            many("goal", "PlanDefinition.goal"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            many("library", "canonical"),
            one("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            req("status", "code"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            one("subtitle", "string"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            one("type", "CodeableConcept"),
            one("url", "uri"),
            one("usage", "string"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "PlanDefinition.goal",
        BACKBONE,
        &[
            many("addresses", "CodeableConcept"),
            one("category", "CodeableConcept"),
            req("description", "CodeableConcept"),
            many("documentation", "RelatedArtifact"),
            one("priority", "CodeableConcept"),
            one("start", "CodeableConcept"),
            many("target", "PlanDefinition.goal.target"),
        ],
    ),
    def(
        "PlanDefinition.goal.target",
        BACKBONE,
        &[
            one("detailCodeableConcept", "CodeableConcept"),
            one("detailQuantity", "Quantity"),
            one("detailRange", "Range"),
            one("due", "Duration"),
            one("measure", "CodeableConcept"),
        ],
    ),
    def(
        "PlanDefinition.action",
        BACKBONE,
        &[
            many("action", "PlanDefinition.action"),
            one("cardinalityBehavior", "code"),
            many("code", "CodeableConcept"),
            many("condition", "PlanDefinition.action.condition"),
            one("definitionCanonical", "canonical"),
            one("definitionUri", "uri"),
            one("description", "string"),
            many("documentation", "RelatedArtifact"),
            many("dynamicValue", "PlanDefinition.action.dynamicValue"),
            many("goalId", "id"),
            one("groupingBehavior", "code"),
            many("input", "DataRequirement"),
            many("output", "DataRequirement"),
            many("participant", "PlanDefinition.action.participant"),
            one("precheckBehavior", "code"),
            one("prefix", "string"),
            one("priority", "code"),
            many("reason", "CodeableConcept"),
            many("relatedAction", "PlanDefinition.action.relatedAction"),
            one("requiredBehavior", "code"),
            one("selectionBehavior", "code"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            one("textEquivalent", "string"),
            one("timingAge", "Age"),
            one("timingDateTime", "dateTime"),
            one("timingDuration", "Duration"),
            one("timingPeriod", "Period"),
            one("timingRange", "Range"),
            one("timingTiming", "Timing"),
            one("title", "string"),
            one("transform", "canonical"),
            many("trigger", "TriggerDefinition"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "PlanDefinition.action.condition",
        BACKBONE,
        &[one("expression", "Expression"), req("kind", "code")],
    ),
    def(
        "PlanDefinition.action.relatedAction",
        BACKBONE,
        &[
            req("actionId", "id"),
            one("offsetDuration", "Duration"),
            one("offsetRange", "Range"),
            req("relationship", "code"),
        ],
    ),
    def(
        "PlanDefinition.action.participant",
        BACKBONE,
        &[one("role", "CodeableConcept"), req("type", "code")],
    ),
    def(
        "PlanDefinition.action.dynamicValue",
        BACKBONE,
        &[one("expression", "Expression"), one("path", "string")],
    ),
    // Practitioner
    def(
        "Practitioner",
        DOMAIN,
        &[
            one("active", "boolean"),
            many("address", "Address"),
            one("birthDate", "date"),
            many("communication", "CodeableConcept"),
            one("gender", "code"),
            many("identifier", "Identifier"),
            many("name", "HumanName"),
            many("photo", "Attachment"),
            many("qualification", "Practitioner.qualification"),
            many("telecom", "ContactPoint"),
        ],
    ),
    def(
        "Practitioner.qualification",
        BACKBONE,
        &[
            req("code", "CodeableConcept"),
            many("identifier", "Identifier"),
            one("issuer", "Reference"),
            one("period", "Period"),
        ],
    ),
    // PractitionerRole
    def(
        "PractitionerRole",
        DOMAIN,
        &[
            one("active", "boolean"),
            one("availabilityExceptions", "string"),
            many("availableTime", "PractitionerRole.availableTime"),
            many("code", "CodeableConcept"),
            many("endpoint", "Reference"),
            many("healthcareService", "Reference"),
            many("identifier", "Identifier"),
            many("location", "Reference"),
            many("notAvailable", "PractitionerRole.notAvailable"),
            one("organization", "Reference"),
            one("period", "Period"),
            one("practitioner", "Reference"),
            many("specialty", "CodeableConcept"),
            many("telecom", "ContactPoint"),
        ],
    ),
    def(
        "PractitionerRole.availableTime",
        BACKBONE,
        &[
            one("allDay", "boolean"),
            one("availableEndTime", "time"),
            one("availableStartTime", "time"),
            many("daysOfWeek", "code"),
        ],
    ),
    def(
        "PractitionerRole.notAvailable",
        BACKBONE,
        &[req("description", "string"), one("during", "Period")],
    ),
    // Procedure
    def(
        "Procedure",
        DOMAIN,
        &[
            one("asserter", "Reference"),
            many("basedOn", "Reference"),
            many("bodySite", "CodeableConcept"),
            one("category", "CodeableConcept"),
            one("code", "CodeableConcept"),
            many("complication", "CodeableConcept"),
            many("complicationDetail", "Reference"),
            one("encounter", "Reference"),
            many("focalDevice", "Procedure.focalDevice"),
            many("followUp", "CodeableConcept"),
            many("identifier", "Identifier"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            one("location", "Reference"),
            many("note", "Annotation"),
            one("outcome", "CodeableConcept"),
            many("partOf", "Reference"),
            one("performedAge", "Age"),
            one("performedDateTime", "dateTime"),
            one("performedPeriod", "Period"),
            one("performedRange", "Range"),
            one("performedString", "string"),
            many("performer", "Procedure.performer"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("recorder", "Reference"),
            many("report", "Reference"),
            req("status", "code"),
            one("statusReason", "CodeableConcept"),
            req("subject", "Reference"),
            many("usedCode", "CodeableConcept"),
            many("usedReference", "Reference"),
        ],
    ),
    def(
        "Procedure.focalDevice",
        BACKBONE,
        &[
            one("action", "CodeableConcept"),
            req("manipulated", "Reference"),
        ],
    ),
    def(
        "Procedure.performer",
        BACKBONE,
        &[
            req("actor", "Reference"),
            one("function", "CodeableConcept"),
            one("onBehalfOf", "Reference"),
        ],
    ),
    // Provenance
    def(
        "Provenance",
        DOMAIN,
        &[
            one("activity", "CodeableConcept"),
            req_many("agent", "Provenance.agent"),
            many("entity", "Provenance.entity"),
            one("location", "Reference"),
            one("occurredDateTime", "dateTime"),
            one("occurredPeriod", "Period"),
            many("policy", "uri"),
            many("reason", "CodeableConcept"),
            req("recorded", "instant"),
            many("signature", "Signature"),
            req_many("target", "Reference"),
        ],
    ),
    def(
        "Provenance.agent",
        BACKBONE,
        &[
            one("onBehalfOf", "Reference"),
            many("role", "CodeableConcept"),
            one("type", "CodeableConcept"),
            req("who", "Reference"),
        ],
    ),
    def(
        "Provenance.entity",
        BACKBONE,
        &[
            many("agent", "Provenance.agent"),
            req("role", "code"),
            req("what", "Reference"),
        ],
    ),
    // Questionnaire
    def(
        "Questionnaire",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("code", "Coding"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            many("derivedFrom", "canonical"),
            one("description", "markdown"),
            one("effectivePeriod", "Period"),
            one("experimental", "boolean"),
            many("identifier", "Identifier"),
            many("item", "Questionnaire.item"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            one("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            req("status", "code"),
            many("subjectType", "code"),
            one("title", "string"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "Questionnaire.item",
        BACKBONE,
        &[
            many("answerOption", "Questionnaire.item.answerOption"),
            one("answerValueSet", "canonical"),
            many("code", "Coding"),
            one("definition", "uri"),
            one("enableBehavior", "code"),
            many("enableWhen", "Questionnaire.item.enableWhen"),
            many("initial", "Questionnaire.item.initial"),
            many("item", "Questionnaire.item"),
            req("linkId", "string"),
            one("maxLength", "integer"),
            one("prefix", "string"),
            one("readOnly", "boolean"),
            one("repeats", "boolean"),
            one("required", "boolean"),
            one("text", "string"),
            req("type", "code"),
        ],
    ),
    def(
        "Questionnaire.item.enableWhen",
        BACKBONE,
        &[
            req("answerBoolean", "boolean"),
            req("answerCoding", "Coding"),
            req("answerDate", "date"),
            req("answerDateTime", "dateTime"),
            req("answerDecimal", "decimal"),
            req("answerInteger", "integer"),
            req("answerQuantity", "Quantity"),
            req("answerReference", "Reference"),
            req("answerString", "string"),
            req("answerTime", "time"),
            req("operator", "code"),
            req("question", "string"),
        ],
    ),
    def(
        "Questionnaire.item.answerOption",
        BACKBONE,
        &[
            one("initialSelected", "boolean"),
            req("valueCoding", "Coding"),
            req("valueDate", "date"),
            req("valueInteger", "integer"),
            req("valueReference", "Reference"),
            req("valueString", "string"),
            req("valueTime", "time"),
        ],
    ),
    def(
        "Questionnaire.item.initial",
        BACKBONE,
        &[
            req("valueAttachment", "Attachment"),
            req("valueBoolean", "boolean"),
            req("valueCoding", "Coding"),
            req("valueDate", "date"),
            req("valueDateTime", "dateTime"),
            req("valueDecimal", "decimal"),
            req("valueInteger", "integer"),
            req("valueQuantity", "Quantity"),
            req("valueReference", "Reference"),
            req("valueString", "string"),
            req("valueTime", "time"),
            req("valueUri", "uri"),
        ],
    ),
    // QuestionnaireResponse
    def(
        "QuestionnaireResponse",
        DOMAIN,
        &[
            one("author", "Reference"),
            one("authored", "dateTime"),
            many("basedOn", "Reference"),
            one("encounter", "Reference"),
            one("identifier", "Identifier"),
            many("item", "QuestionnaireResponse.item"),
            many("partOf", "Reference"),
            one("questionnaire", "canonical"),
            one("source", "Reference"),
            req("status", "code"),
            one("subject", "Reference"),
        ],
    ),
    def(
        "QuestionnaireResponse.item",
        BACKBONE,
        &[
            many("answer", "QuestionnaireResponse.item.answer"),
            one("definition", "uri"),
            many("item", "QuestionnaireResponse.item"),
            req("linkId", "string"),
            one("text", "string"),
        ],
    ),
    def(
        "QuestionnaireResponse.item.answer",
        BACKBONE,
        &[
            many("item", "QuestionnaireResponse.item"),
            one("valueAttachment", "Attachment"),
            one("valueBoolean", "boolean"),
            one("valueCoding", "Coding"),
            one("valueDate", "date"),
            one("valueDateTime", "dateTime"),
            one("valueDecimal", "decimal"),
            one("valueInteger", "integer"),
            one("valueQuantity", "Quantity"),
            one("valueReference", "Reference"),
            one("valueString", "string"),
            one("valueTime", "time"),
            one("valueUri", "uri"),
        ],
    ),
    // RelatedPerson
    def(
        "RelatedPerson",
        DOMAIN,
        &[
            one("active", "boolean"),
            many("address", "Address"),
            one("birthDate", "date"),
            many("communication", "RelatedPerson.communication"),
            one("gender", "code"),
            many("identifier", "Identifier"),
            many("name", "HumanName"),
            req("patient", "Reference"),
            one("period", "Period"),
            many("photo", "Attachment"),
            many("relationship", "CodeableConcept"),
            many("telecom", "ContactPoint"),
        ],
    ),
    def(
        "RelatedPerson.communication",
        BACKBONE,
        &[
            req("language", "CodeableConcept"),
            one("preferred", "boolean"),
        ],
    ),
    // RequestGroup
    def(
        "RequestGroup",
        DOMAIN,
        &[
            many("action", "RequestGroup.action"),
            one("author", "Reference"),
            one("authoredOn", "dateTime"),
            many("basedOn", "Reference"),
            one("code", "CodeableConcept"),
            one("encounter", "Reference"),
            one("groupIdentifier", "Identifier"),
            many("identifier", "Identifier"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            req("intent", "code"),
            many("note", "Annotation"),
            one("priority", "code"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            many("replaces", "Reference"),
            req("status", "code"),
            one("subject", "Reference"),
        ],
    ),
    def(
        "RequestGroup.action",
        BACKBONE,
        &[
            many("action", "RequestGroup.action"),
            one("cardinalityBehavior", "code"),
            many("code", "CodeableConcept"),
            many("condition", "RequestGroup.action.condition"),
            one("description", "string"),
            many("documentation", "RelatedArtifact"),
            one("groupingBehavior", "code"),
            many("participant", "Reference"),
            one("precheckBehavior", "code"),
            one("prefix", "string"),
            one("priority", "code"),
            many("relatedAction", "RequestGroup.action.relatedAction"),
            one("requiredBehavior", "code"),
            one("resource", "Reference"),
            one("selectionBehavior", "code"),
            one("textEquivalent", "string"),
            one("timingAge", "Age"),
            one("timingDateTime", "dateTime"),
            one("timingDuration", "Duration"),
            one("timingPeriod", "Period"),
            one("timingRange", "Range"),
            one("timingTiming", "Timing"),
            one("title", "string"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "RequestGroup.action.condition",
        BACKBONE,
        &[one("expression", "Expression"), req("kind", "code")],
    ),
    def(
        "RequestGroup.action.relatedAction",
        BACKBONE,
        &[
            req("actionId", "id"),
            one("offsetDuration", "Duration"),
            one("offsetRange", "Range"),
            req("relationship", "code"),
        ],
    ),
    // ResearchDefinition
    def(
        "ResearchDefinition",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            many("comment", "string"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            one("experimental", "boolean"),
            one("exposure", "Reference"),
            one("exposureAlternative", "Reference"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            many("library", "canonical"),
            one("name", "string"),
            one("outcome", "Reference"),
            req("population", "Reference"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            one("shortTitle", "string"),
            req("status", "code"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            one("subtitle", "string"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            one("url", "uri"),
            one("usage", "string"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    // ResearchElementDefinition
    def(
        "ResearchElementDefinition",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            req_many("characteristic", "ResearchElementDefinition.characteristic"),
            many("comment", "string"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            one("experimental", "boolean"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            many("library", "canonical"),
            one("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            one("shortTitle", "string"),
            req("status", "code"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            one("subtitle", "string"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            req("type", "code"),
            one("url", "uri"),
            one("usage", "string"),
            many("useContext", "UsageContext"),
            one("variableType", "code"),
            one("version", "string"),
        ],
    ),
    def(
        "ResearchElementDefinition.characteristic",
        BACKBONE,
        &[
            req("definitionCanonical", "canonical"),
            req("definitionCodeableConcept", "CodeableConcept"),
            req("definitionDataRequirement", "DataRequirement"),
            req("definitionExpression", "Expression"),
            one("exclude", "boolean"),
            one("participantEffectiveDateTime", "dateTime"),
            one("participantEffectiveDescription", "string"),
            one("participantEffectiveDuration", "Duration"),
            one("participantEffectiveGroupMeasure", "code"),
            one("participantEffectivePeriod", "Period"),
            one("participantEffectiveTimeFromStart", "Duration"),
            one("participantEffectiveTiming", "Timing"),
            one("studyEffectiveDateTime", "dateTime"),
            one("studyEffectiveDescription", "string"),
            one("studyEffectiveDuration", "Duration"),
            one("studyEffectiveGroupMeasure", "code"),
            one("studyEffectivePeriod", "Period"),
            one("studyEffectiveTimeFromStart", "Duration"),
            one("studyEffectiveTiming", "Timing"),
            one("unitOfMeasure", "CodeableConcept"),
            many("usageContext", "UsageContext"),
        ],
    ),
    // ResearchStudy
    def(
        "ResearchStudy",
        DOMAIN,
        &[
            many("arm", "ResearchStudy.arm"),
            many("category", "CodeableConcept"),
            many("condition", "CodeableConcept"),
            many("contact", "ContactDetail"),
            one("description", "markdown"),
            many("enrollment", "Reference"),
            many("focus", "CodeableConcept"),
            many("identifier", "Identifier"),
            many("keyword", "CodeableConcept"),
            many("location", "CodeableConcept"),
            many("note", "Annotation"),
            many("objective", "ResearchStudy.objective"),
            many("partOf", "Reference"),
            one("period", "Period"),
            one("phase", "CodeableConcept"),
            one("primaryPurposeType", "CodeableConcept"),
            one("principalInvestigator", "Reference"),
            many("protocol", "Reference"),
            one("reasonStopped", "CodeableConcept"),
            many("relatedArtifact", "RelatedArtifact"),
            many("site", "Reference"),
            one("sponsor", "Reference"),
            req("status", "code"),
            one("title", "string"),
        ],
    ),
    def(
        "ResearchStudy.arm",
        BACKBONE,
        &[
            one("description", "string"),
            req("name", "string"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "ResearchStudy.objective",
        BACKBONE,
        &[one("name", "string"), one("type", "CodeableConcept")],
    ),
    // ResearchSubject
    def(
        "ResearchSubject",
        DOMAIN,
        &[
            one("actualArm", "string"),
            one("assignedArm", "string"),
            one("consent", "Reference"),
            many("identifier", "Identifier"),
            req("individual", "Reference"),
            one("period", "Period"),
            req("status", "code"),
            req("study", "Reference"),
        ],
    ),
    // RiskAssessment
    def(
        "RiskAssessment",
        DOMAIN,
        &[
            one("basedOn", "Reference"),
            many("basis", "Reference"),
            one("code", "CodeableConcept"),
            one("condition", "Reference"),
            one("encounter", "Reference"),
            many("identifier", "Identifier"),
            one("method", "CodeableConcept"),
            one("mitigation", "string"),
            many("note", "Annotation"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrencePeriod", "Period"),
            one("parent", "Reference"),
            one("performer", "Reference"),
            many("prediction", "RiskAssessment.prediction"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            req("status", "code"),
            req("subject", "Reference"),
        ],
    ),
    def(
        "RiskAssessment.prediction",
        BACKBONE,
        &[
            one("outcome", "CodeableConcept"),
            one("probabilityDecimal", "decimal"),
            one("probabilityRange", "Range"),
            one("qualitativeRisk", "CodeableConcept"),
            one("rationale", "string"),
            one("relativeRisk", "decimal"),
            one("whenPeriod", "Period"),
            one("whenRange", "Range"),
        ],
    ),
    // RiskEvidenceSynthesis
    def(
        "RiskEvidenceSynthesis",
        DOMAIN,
        &[
            one("approvalDate", "date"),
            many("author", "ContactDetail"),
            many("certainty", "RiskEvidenceSynthesis.certainty"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("editor", "ContactDetail"),
            one("effectivePeriod", "Period"),
            many("endorser", "ContactDetail"),
            one("exposure", "Reference"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("lastReviewDate", "date"),
            one("name", "string"),
            many("note", "Annotation"),
            req("outcome", "Reference"),
            req("population", "Reference"),
            one("publisher", "string"),
            many("relatedArtifact", "RelatedArtifact"),
            many("reviewer", "ContactDetail"),
            one("riskEstimate", "RiskEvidenceSynthesis.riskEstimate"),
            one("sampleSize", "RiskEvidenceSynthesis.sampleSize"),
            req("status", "code"),
            one("studyType", "CodeableConcept"),
            one("synthesisType", "CodeableConcept"),
            one("title", "string"),
            many("topic", "CodeableConcept"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "RiskEvidenceSynthesis.sampleSize",
        BACKBONE,
        &[
            one("description", "string"),
            one("numberOfParticipants", "integer"),
            one("numberOfStudies", "integer"),
        ],
    ),
    def(
        "RiskEvidenceSynthesis.riskEstimate",
        BACKBONE,
        &[
            one("denominatorCount", "integer"),
            one("description", "string"),
            one("numeratorCount", "integer"),
            many("precisionEstimate", "RiskEvidenceSynthesis.riskEstimate.precisionEstimate"),
            one("type", "CodeableConcept"),
            one("unitOfMeasure", "CodeableConcept"),
            one("value", "decimal"),
        ],
    ),
    def(
        "RiskEvidenceSynthesis.riskEstimate.precisionEstimate",
        BACKBONE,
        &[
            one("from", "decimal"),
            one("level", "decimal"),
            one("to", "decimal"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "RiskEvidenceSynthesis.certainty",
        BACKBONE,
        &[
            many("certaintySubcomponent", "RiskEvidenceSynthesis.certainty.certaintySubcomponent"),
            many("note", "Annotation"),
            many("rating", "CodeableConcept"),
        ],
    ),
    def(
        "RiskEvidenceSynthesis.certainty.certaintySubcomponent",
        BACKBONE,
        &[
            many("note", "Annotation"),
            many("rating", "CodeableConcept"),
            one("type", "CodeableConcept"),
        ],
    ),
    // Schedule
    def(
        "Schedule",
        DOMAIN,
        &[
            one("active", "boolean"),
            req_many("actor", "Reference"),
            one("comment", "string"),
            many("identifier", "Identifier"),
            one("planningHorizon", "Period"),
            many("serviceCategory", "CodeableConcept"),
            many("serviceType", "CodeableConcept"),
            many("specialty", "CodeableConcept"),
        ],
    ),
    // SearchParameter
    def(
        "SearchParameter",
        DOMAIN,
        &[
            req_many("base", "code"),
            many("chain", "string"),
            req("code", "code"),
            many("comparator", "code"),
            many("component", "SearchParameter.component"),
            many("contact", "ContactDetail"),
            one("date", "dateTime"),
            one("derivedFrom", "canonical"),
            req("description", "markdown"),
            one("experimental", "boolean"),
            one("expression", "string"),
            many("jurisdiction", "CodeableConcept"),
            many("modifier", "code"),
            one("multipleAnd", "boolean"),
            one("multipleOr", "boolean"),
            req("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            req("status", "code"),
            many("target", "code"),
            req("type", "code"),
            req("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
            one("xpath", "string"),
            one("xpathUsage", "code"),
        ],
    ),
    def(
        "SearchParameter.component",
        BACKBONE,
        &[
            req("definition", "canonical"),
            req("expression", "string"),
        ],
    ),
    // ServiceRequest
    def(
        "ServiceRequest",
        DOMAIN,
        &[
            one("asNeededBoolean", "boolean"),
            one("asNeededCodeableConcept", "CodeableConcept"),
            one("authoredOn", "dateTime"),
            many("basedOn", "Reference"),
            many("bodySite", "CodeableConcept"),
            many("category", "CodeableConcept"),
            one("code", "CodeableConcept"),
            one("doNotPerform", "boolean"),
            one("encounter", "Reference"),
            many("identifier", "Identifier"),
            many("instantiatesCanonical", "canonical"),
            many("instantiatesUri", "uri"),
            many("insurance", "Reference"),
            req("intent", "code"),
            many("locationCode", "CodeableConcept"),
            many("locationReference", "Reference"),
            many("note", "Annotation"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrencePeriod", "Period"),
            one("occurrenceTiming", "Timing"),
            many("orderDetail", "CodeableConcept"),
            one("patientInstruction", "string"),
            many("performer", "Reference"),
            one("performerType", "CodeableConcept"),
            one("priority", "code"),
            one("quantityQuantity", "Quantity"),
            one("quantityRange", "Range"),
            one("quantityRatio", "Ratio"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            many("relevantHistory", "Reference"),
            many("replaces", "Reference"),
            one("requester", "Reference"),
            one("requisition", "Identifier"),
            many("specimen", "Reference"),
            req("status", "code"),
            req("subject", "Reference"),
            many("supportingInfo", "Reference"),
        ],
    ),
    // Slot
    def(
        "Slot",
        DOMAIN,
        &[
            one("appointmentType", "CodeableConcept"),
            one("comment", "string"),
            req("end", "instant"),
            many("identifier", "Identifier"),
            one("overbooked", "boolean"),
            req("schedule", "Reference"),
            many("serviceCategory", "CodeableConcept"),
            many("serviceType", "CodeableConcept"),
            many("specialty", "CodeableConcept"),
            req("start", "instant"),
            req("status", "code"),
        ],
    ),
    // Specimen
    def(
        "Specimen",
        DOMAIN,
        &[
            one("accessionIdentifier", "Identifier"),
            one("collection", "Specimen.collection"),
            many("condition", "CodeableConcept"),
            many("container", "Specimen.container"),
            many("identifier", "Identifier"),
            many("note", "Annotation"),
            many("parent", "Reference"),
            many("processing", "Specimen.processing"),
            one("receivedTime", "dateTime"),
            many("request", "Reference"),
            one("status", "code"),
            one("subject", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "Specimen.collection",
        BACKBONE,
        &[
            one("bodySite", "CodeableConcept"),
            one("collectedDateTime", "dateTime"),
            one("collectedPeriod", "Period"),
            one("collector", "Reference"),
            one("duration", "Duration"),
            one("fastingStatusCodeableConcept", "CodeableConcept"),
            one("fastingStatusDuration", "Duration"),
            one("method", "CodeableConcept"),
            one("quantity", "Quantity"),
        ],
    ),
    def(
        "Specimen.processing",
        BACKBONE,
        &[
            many("additive", "Reference"),
            one("description", "string"),
            one("procedure", "CodeableConcept"),
            one("timeDateTime", "dateTime"),
            one("timePeriod", "Period"),
        ],
    ),
    def(
        "Specimen.container",
        BACKBONE,
        &[
            one("additiveCodeableConcept", "CodeableConcept"),
            one("additiveReference", "Reference"),
            one("capacity", "Quantity"),
            one("description", "string"),
            many("identifier", "Identifier"),
            one("specimenQuantity", "Quantity"),
            one("type", "CodeableConcept"),
        ],
    ),
    // SpecimenDefinition
    def(
        "SpecimenDefinition",
        DOMAIN,
        &[
            many("collection", "CodeableConcept"),
            one("identifier", "Identifier"),
            many("patientPreparation", "CodeableConcept"),
            one("timeAspect", "string"),
            one("typeCollected", "CodeableConcept"),
            many("typeTested", "SpecimenDefinition.typeTested"),
        ],
    ),
    def(
        "SpecimenDefinition.typeTested",
        BACKBONE,
        &[
            one("container", "SpecimenDefinition.typeTested.container"),
            many("handling", "SpecimenDefinition.typeTested.handling"),
            one("isDerived", "boolean"),
            req("preference", "code"),
            many("rejectionCriterion", "CodeableConcept"),
            one("requirement", "string"),
            one("retentionTime", "Duration"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SpecimenDefinition.typeTested.container",
        BACKBONE,
        &[
            many("additive", "SpecimenDefinition.typeTested.container.additive"),
            one("cap", "CodeableConcept"),
            one("capacity", "Quantity"),
            one("description", "string"),
            one("material", "CodeableConcept"),
            one("minimumVolumeQuantity", "Quantity"),
            one("minimumVolumeString", "string"),
            one("preparation", "string"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SpecimenDefinition.typeTested.container.additive",
        BACKBONE,
        &[
            req("additiveCodeableConcept", "CodeableConcept"),
            req("additiveReference", "Reference"),
        ],
    ),
    def(
        "SpecimenDefinition.typeTested.handling",
        BACKBONE,
        &[
            one("instruction", "string"),
            one("maxDuration", "Duration"),
            one("temperatureQualifier", "CodeableConcept"),
            one("temperatureRange", "Range"),
        ],
    ),
    // StructureDefinition
    def(
        "StructureDefinition",
        DOMAIN,
        &[
            req("abstract", "boolean"),
            one("baseDefinition", "canonical"),
            many("contact", "ContactDetail"),
            many("context", "StructureDefinition.context"),
            many("contextInvariant", "string"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("derivation", "code"),
            one("description", "markdown"),
            one("differential", "StructureDefinition.differential"),
            one("experimental", "boolean"),
            one("fhirVersion", "code"),
            many("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            many("keyword", "Coding"),
            req("kind", "code"),
            many("mapping", "StructureDefinition.mapping"),
            req("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            one("snapshot", "StructureDefinition.snapshot"),
            req("status", "code"),
            one("title", "string"),
            req("type", "uri"),
            req("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "StructureDefinition.mapping",
        BACKBONE,
        &[
            one("comment", "string"),
            req("identity", "id"),
            one("name", "string"),
            one("uri", "uri"),
        ],
    ),
    def(
        "StructureDefinition.context",
        BACKBONE,
        &[req("expression", "string"), req("type", "code")],
    ),
    def(
        "StructureDefinition.snapshot",
        BACKBONE,
        &[req_many("element", "ElementDefinition")],
    ),
    def(
        "StructureDefinition.differential",
        BACKBONE,
        &[req_many("element", "ElementDefinition")],
    ),
    // StructureMap
    def(
        "StructureMap",
        DOMAIN,
        &[
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            one("experimental", "boolean"),
            req_many("group", "StructureMap.group"),
            many("identifier", "Identifier"),
            many("import", "canonical"),
            many("jurisdiction", "CodeableConcept"),
            req("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            req("status", "code"),
            many("structure", "StructureMap.structure"),
            one("title", "string"),
            req("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "StructureMap.structure",
        BACKBONE,
        &[
            one("alias", "string"),
            one("documentation", "string"),
            req("mode", "code"),
            req("url", "canonical"),
        ],
    ),
    def(
        "StructureMap.group",
        BACKBONE,
        &[
            one("documentation", "string"),
            one("extends", "id"),
            req_many("input", "StructureMap.group.input"),
            req("name", "id"),
            req_many("rule", "StructureMap.group.rule"),
            req("typeMode", "code"),
        ],
    ),
    def(
        "StructureMap.group.input",
        BACKBONE,
        &[
            one("documentation", "string"),
            req("mode", "code"),
            req("name", "id"),
            one("type", "string"),
        ],
    ),
    def(
        "StructureMap.group.rule",
        BACKBONE,
        &[
            many("dependent", "StructureMap.group.rule.dependent"),
            one("documentation", "string"),
            req("name", "id"),
            many("rule", "StructureMap.group.rule"),
            req_many("source", "StructureMap.group.rule.source"),
            many("target", "StructureMap.group.rule.target"),
        ],
    ),
    def(
        "StructureMap.group.rule.source",
        BACKBONE,
        &[
            one("check", "string"),
            one("condition", "string"),
            req("context", "id"),
            one("defaultValueAddress", "Address"),
            one("defaultValueAge", "Age"),
            one("defaultValueAnnotation", "Annotation"),
            one("defaultValueAttachment", "Attachment"),
            one("defaultValueBase64Binary", "base64Binary"),
            one("defaultValueBoolean", "boolean"),
            one("defaultValueCanonical", "canonical"),
            one("defaultValueCode", "code"),
            one("defaultValueCodeableConcept", "CodeableConcept"),
            one("defaultValueCoding", "Coding"),
            one("defaultValueContactDetail", "ContactDetail"),
            one("defaultValueContactPoint", "ContactPoint"),
            one("defaultValueContributor", "Contributor"),
            one("defaultValueCount", "Count"),
            one("defaultValueDataRequirement", "DataRequirement"),
            one("defaultValueDate", "date"),
            one("defaultValueDateTime", "dateTime"),
            one("defaultValueDecimal", "decimal"),
            one("defaultValueDistance", "Distance"),
            one("defaultValueDosage", "Dosage"),
            one("defaultValueDuration", "Duration"),
            one("defaultValueExpression", "Expression"),
            one("defaultValueHumanName", "HumanName"),
            one("defaultValueId", "id"),
            one("defaultValueIdentifier", "Identifier"),
            one("defaultValueInstant", "instant"),
            one("defaultValueInteger", "integer"),
            one("defaultValueMarkdown", "markdown"),
            one("defaultValueMeta", "Meta"),
            one("defaultValueMoney", "Money"),
            one("defaultValueOid", "oid"),
            one("defaultValueParameterDefinition", "ParameterDefinition"),
            one("defaultValuePeriod", "Period"),
            one("defaultValuePositiveInt", "positiveInt"),
            one("defaultValueQuantity", "Quantity"),
            one("defaultValueRange", "Range"),
            one("defaultValueRatio", "Ratio"),
            one("defaultValueReference", "Reference"),
            one("defaultValueRelatedArtifact", "RelatedArtifact"),
            one("defaultValueSampledData", "SampledData"),
            one("defaultValueSignature", "Signature"),
            one("defaultValueString", "string"),
            one("defaultValueTime", "time"),
            one("defaultValueTiming", "Timing"),
            one("defaultValueTriggerDefinition", "TriggerDefinition"),
            one("defaultValueUnsignedInt", "unsignedInt"),
            one("defaultValueUri", "uri"),
            one("defaultValueUrl", "url"),
            one("defaultValueUsageContext", "UsageContext"),
            one("defaultValueUuid", "uuid"),
            one("element", "string"),
            one("listMode", "code"),
            one("logMessage", "string"),
            one("max", "string"),
            one("min", "integer"),
            one("type", "string"),
            one("variable", "id"),
        ],
    ),
    def(
        "StructureMap.group.rule.target",
        BACKBONE,
        &[
            one("context", "id"),
            one("contextType", "code"),
            one("element", "string"),
            many("listMode", "code"),
            one("listRuleId", "id"),
            many("parameter", "StructureMap.group.rule.target.parameter"),
            one("transform", "code"),
            one("variable", "id"),
        ],
    ),
    def(
        "StructureMap.group.rule.target.parameter",
        BACKBONE,
        &[
            req("valueBoolean", "boolean"),
            req("valueDecimal", "decimal"),
            req("valueId", "id"),
            req("valueInteger", "integer"),
            req("valueString", "string"),
        ],
    ),
    def(
        "StructureMap.group.rule.dependent",
        BACKBONE,
        &[req("name", "id"), req_many("variable", "string")],
    ),
    // Subscription
    def(
        "Subscription",
        DOMAIN,
        &[
            req("channel", "Subscription.channel"),
            many("contact", "ContactPoint"),
            req("criteria", "string"),
            one("end", "instant"),
            one("error", "string"),
            req("reason", "string"),
            req("status", "code"),
        ],
    ),
    def(
        "Subscription.channel",
        BACKBONE,
        &[
            one("endpoint", "url"),
            many("header", "string"),
            one("payload", "code"),
            req("type", "code"),
        ],
    ),
    // Substance
    def(
        "Substance",
        DOMAIN,
        &[
            many("category", "CodeableConcept"),
            req("code", "CodeableConcept"),
            one("description", "string"),
            many("identifier", "Identifier"),
            many("ingredient", "Substance.ingredient"),
            many("instance", "Substance.instance"),
            one("status", "code"),
        ],
    ),
    def(
        "Substance.instance",
        BACKBONE,
        &[
            one("expiry", "dateTime"),
            one("identifier", "Identifier"),
            one("quantity", "Quantity"),
        ],
    ),
    def(
        "Substance.ingredient",
        BACKBONE,
        &[
            one("quantity", "Ratio"),
            req("substanceCodeableConcept", "CodeableConcept"),
            req("substanceReference", "Reference"),
        ],
    ),
    // SubstanceNucleicAcid
    def(
        "SubstanceNucleicAcid",
        DOMAIN,
        &[
            one("areaOfHybridisation", "string"),
            one("numberOfSubunits", "integer"),
            one("oligoNucleotideType", "CodeableConcept"),
            one("sequenceType", "CodeableConcept"),
            many("subunit", "SubstanceNucleicAcid.subunit"),
        ],
    ),
    def(
        "SubstanceNucleicAcid.subunit",
        BACKBONE,
        &[
            one("fivePrime", "CodeableConcept"),
            one("length", "integer"),
            many("linkage", "SubstanceNucleicAcid.subunit.linkage"),
            one("sequence", "string"),
            one("sequenceAttachment", "Attachment"),
            one("subunit", "integer"),
            many("sugar", "SubstanceNucleicAcid.subunit.sugar"),
            one("threePrime", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceNucleicAcid.subunit.linkage",
        BACKBONE,
        &[
            one("connectivity", "string"),
            one("identifier", "Identifier"),
            one("name", "string"),
            one("residueSite", "string"),
        ],
    ),
    def(
        "SubstanceNucleicAcid.subunit.sugar",
        BACKBONE,
        &[
            one("identifier", "Identifier"),
            one("name", "string"),
            one("residueSite", "string"),
        ],
    ),
    // SubstancePolymer
    def(
        "SubstancePolymer",
        DOMAIN,
        &[
            one("class", "CodeableConcept"),
            many("copolymerConnectivity", "CodeableConcept"),
            one("geometry", "CodeableConcept"),
            many("modification", "string"),
            many("monomerSet", "SubstancePolymer.monomerSet"),
            many("repeat", "SubstancePolymer.repeat"),
        ],
    ),
    def(
        "SubstancePolymer.monomerSet",
        BACKBONE,
        &[
            one("ratioType", "CodeableConcept"),
            many("startingMaterial", "SubstancePolymer.monomerSet.startingMaterial"),
        ],
    ),
    def(
        "SubstancePolymer.monomerSet.startingMaterial",
        BACKBONE,
        &[
            one("amount", "SubstanceAmount"),
            one("isDefining", "boolean"),
            one("material", "CodeableConcept"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SubstancePolymer.repeat",
        BACKBONE,
        &[
            one("averageMolecularFormula", "string"),
            one("numberOfUnits", "integer"),
            many("repeatUnit", "SubstancePolymer.repeat.repeatUnit"),
            one("repeatUnitAmountType", "CodeableConcept"),
        ],
    ),
    def(
        "SubstancePolymer.repeat.repeatUnit",
        BACKBONE,
        &[
            one("amount", "SubstanceAmount"),
            many("degreeOfPolymerisation", "SubstancePolymer.repeat.repeatUnit.degreeOfPolymerisation"),
            one("orientationOfPolymerisation", "CodeableConcept"),
            one("repeatUnit", "string"),
            many("structuralRepresentation", "SubstancePolymer.repeat.repeatUnit.structuralRepresentation"),
        ],
    ),
    def(
        "SubstancePolymer.repeat.repeatUnit.degreeOfPolymerisation",
        BACKBONE,
        &[
            one("amount", "SubstanceAmount"),
            one("degree", "CodeableConcept"),
        ],
    ),
    def(
        "SubstancePolymer.repeat.repeatUnit.structuralRepresentation",
        BACKBONE,
        &[
            one("attachment", "Attachment"),
            one("representation", "string"),
            one("type", "CodeableConcept"),
        ],
    ),
    // SubstanceProtein
    def(
        "SubstanceProtein",
        DOMAIN,
        &[
            many("disulfideLinkage", "string"),
            one("numberOfSubunits", "integer"),
            one("sequenceType", "CodeableConcept"),
            many("subunit", "SubstanceProtein.subunit"),
        ],
    ),
    def(
        "SubstanceProtein.subunit",
        BACKBONE,
        &[
            one("cTerminalModification", "string"),
            one("cTerminalModificationId", "Identifier"),
            one("length", "integer"),
            one("nTerminalModification", "string"),
            one("nTerminalModificationId", "Identifier"),
            one("sequence", "string"),
            one("sequenceAttachment", "Attachment"),
            one("subunit", "integer"),
        ],
    ),
    // SubstanceReferenceInformation
    def(
        "SubstanceReferenceInformation",
        DOMAIN,
        &[
            many("classification", "SubstanceReferenceInformation.classification"),
            one("comment", "string"),
            many("gene", "SubstanceReferenceInformation.gene"),
            many("geneElement", "SubstanceReferenceInformation.geneElement"),
            many("target", "SubstanceReferenceInformation.target"),
        ],
    ),
    def(
        "SubstanceReferenceInformation.gene",
        BACKBONE,
        &[
            one("gene", "CodeableConcept"),
            one("geneSequenceOrigin", "CodeableConcept"),
            many("source", "Reference"),
        ],
    ),
    def(
        "SubstanceReferenceInformation.geneElement",
        BACKBONE,
        &[
            one("element", "Identifier"),
            many("source", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceReferenceInformation.classification",
        BACKBONE,
        &[
            one("classification", "CodeableConcept"),
            one("domain", "CodeableConcept"),
            many("source", "Reference"),
            many("subtype", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceReferenceInformation.target",
        BACKBONE,
        &[
            one("amountQuantity", "Quantity"),
            one("amountRange", "Range"),
            one("amountString", "string"),
            one("amountType", "CodeableConcept"),
            one("interaction", "CodeableConcept"),
            one("organism", "CodeableConcept"),
            one("organismType", "CodeableConcept"),
            many("source", "Reference"),
            one("target", "Identifier"),
            one("type", "CodeableConcept"),
        ],
    ),
    // SubstanceSourceMaterial
    def(
        "SubstanceSourceMaterial",
        DOMAIN,
        &[
            many("countryOfOrigin", "CodeableConcept"),
            one("developmentStage", "CodeableConcept"),
            many("fractionDescription", "SubstanceSourceMaterial.fractionDescription"),
            many("geographicalLocation", "string"),
            one("organism", "SubstanceSourceMaterial.organism"),
            one("organismId", "Identifier"),
            one("organismName", "string"),
            many("parentSubstanceId", "Identifier"),
            many("parentSubstanceName", "string"),
            many("partDescription", "SubstanceSourceMaterial.partDescription"),
            one("sourceMaterialClass", "CodeableConcept"),
            one("sourceMaterialState", "CodeableConcept"),
            one("sourceMaterialType", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSourceMaterial.fractionDescription",
        BACKBONE,
        &[
            one("fraction", "string"),
            one("materialType", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSourceMaterial.organism",
        BACKBONE,
        &[
            many("author", "SubstanceSourceMaterial.organism.author"),
            one("family", "CodeableConcept"),
            one("genus", "CodeableConcept"),
            one("hybrid", "SubstanceSourceMaterial.organism.hybrid"),
            one("intraspecificDescription", "string"),
            one("intraspecificType", "CodeableConcept"),
            one("organismGeneral", "SubstanceSourceMaterial.organism.organismGeneral"),
            one("species", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSourceMaterial.organism.author",
        BACKBONE,
        &[
            one("authorDescription", "string"),
            one("authorType", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSourceMaterial.organism.hybrid",
        BACKBONE,
        &[
            one("hybridType", "CodeableConcept"),
            one("maternalOrganismId", "string"),
            one("maternalOrganismName", "string"),
            one("paternalOrganismId", "string"),
            one("paternalOrganismName", "string"),
        ],
    ),
    def(
        "SubstanceSourceMaterial.organism.organismGeneral",
        BACKBONE,
        &[
            one("class", "CodeableConcept"),
            one("kingdom", "CodeableConcept"),
            one("order", "CodeableConcept"),
            one("phylum", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSourceMaterial.partDescription",
        BACKBONE,
        &[
            one("part", "CodeableConcept"),
            one("partLocation", "CodeableConcept"),
        ],
    ),
    // SubstanceSpecification
    def(
        "SubstanceSpecification",
        DOMAIN,
        &[
            many("code", "SubstanceSpecification.code"),
            one("comment", "string"),
            one("description", "string"),
            one("domain", "CodeableConcept"),
            one("identifier", "Identifier"),
            many("moiety", "SubstanceSpecification.moiety"),
            many("molecularWeight", "SubstanceSpecification.structure.isotope.molecularWeight"),
            many("name", "SubstanceSpecification.name"),
            one("nucleicAcid", "Reference"),
            one("polymer", "Reference"),
            many("property", "SubstanceSpecification.property"),
            one("protein", "Reference"),
            one("referenceInformation", "Reference"),
            many("relationship", "SubstanceSpecification.relationship"),
            many("source", "Reference"),
            one("sourceMaterial", "Reference"),
            one("status", "CodeableConcept"),
            one("structure", "SubstanceSpecification.structure"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSpecification.moiety",
        BACKBONE,
        &[
            one("amountQuantity", "Quantity"),
            one("amountString", "string"),
            one("identifier", "Identifier"),
            one("molecularFormula", "string"),
            one("name", "string"),
            one("opticalActivity", "CodeableConcept"),
            one("role", "CodeableConcept"),
            one("stereochemistry", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSpecification.property",
        BACKBONE,
        &[
            one("amountQuantity", "Quantity"),
            one("amountString", "string"),
            one("category", "CodeableConcept"),
            one("code", "CodeableConcept"),
            one("definingSubstanceCodeableConcept", "CodeableConcept"),
            one("definingSubstanceReference", "Reference"),
            one("parameters", "string"),
        ],
    ),
    def(
        "SubstanceSpecification.structure",
        BACKBONE,
        &[
            many("isotope", "SubstanceSpecification.structure.isotope"),
            one("molecularFormula", "string"),
            one("molecularFormulaByMoiety", "string"),
            one("molecularWeight", "SubstanceSpecification.structure.isotope.molecularWeight"),
            one("opticalActivity", "CodeableConcept"),
            many("representation", "SubstanceSpecification.structure.representation"),
            many("source", "Reference"),
            one("stereochemistry", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSpecification.structure.isotope",
        BACKBONE,
        &[
            one("halfLife", "Quantity"),
            one("identifier", "Identifier"),
            one("molecularWeight", "SubstanceSpecification.structure.isotope.molecularWeight"),
            one("name", "CodeableConcept"),
            one("substitution", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSpecification.structure.isotope.molecularWeight",
        BACKBONE,
        &[
            one("amount", "Quantity"),
            one("method", "CodeableConcept"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSpecification.structure.representation",
        BACKBONE,
        &[
            one("attachment", "Attachment"),
            one("representation", "string"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSpecification.code",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("comment", "string"),
            many("source", "Reference"),
            one("status", "CodeableConcept"),
            one("statusDate", "dateTime"),
        ],
    ),
    def(
        "SubstanceSpecification.name",
        BACKBONE,
        &[
            many("domain", "CodeableConcept"),
            many("jurisdiction", "CodeableConcept"),
            many("language", "CodeableConcept"),
            req("name", "string"),
            many("official", "SubstanceSpecification.name.official"),
            one("preferred", "boolean"),
            many("source", "Reference"),
            one("status", "CodeableConcept"),
            many("synonym", "SubstanceSpecification.name"),
            many("translation", "SubstanceSpecification.name"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSpecification.name.official",
        BACKBONE,
        &[
            one("authority", "CodeableConcept"),
            one("date", "dateTime"),
            one("status", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceSpecification.relationship",
        BACKBONE,
        &[
            one("amountQuantity", "Quantity"),
            one("amountRange", "Range"),
            one("amountRatio", "Ratio"),
            one("amountRatioLowLimit", "Ratio"),
            one("amountString", "string"),
            one("amountType", "CodeableConcept"),
            one("isDefining", "boolean"),
            one("relationship", "CodeableConcept"),
            many("source", "Reference"),
            one("substanceCodeableConcept", "CodeableConcept"),
            one("substanceReference", "Reference"),
        ],
    ),
    // SupplyDelivery
    def(
        "SupplyDelivery",
        DOMAIN,
        &[
            many("basedOn", "Reference"),
            one("destination", "Reference"),
            many("identifier", "Identifier"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrencePeriod", "Period"),
            one("occurrenceTiming", "Timing"),
            many("partOf", "Reference"),
            one("patient", "Reference"),
            many("receiver", "Reference"),
            one("status", "code"),
            one("suppliedItem", "SupplyDelivery.suppliedItem"),
            one("supplier", "Reference"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "SupplyDelivery.suppliedItem",
        BACKBONE,
        &[
            one("itemCodeableConcept", "CodeableConcept"),
            one("itemReference", "Reference"),
            one("quantity", "Quantity"),
        ],
    ),
    // SupplyRequest
    def(
        "SupplyRequest",
        DOMAIN,
        &[
            one("authoredOn", "dateTime"),
            one("category", "CodeableConcept"),
            one("deliverFrom", "Reference"),
            one("deliverTo", "Reference"),
            many("identifier", "Identifier"),
            req("itemCodeableConcept", "CodeableConcept"),
            req("itemReference", "Reference"),
            one("occurrenceDateTime", "dateTime"),
            one("occurrencePeriod", "Period"),
            one("occurrenceTiming", "Timing"),
            many("parameter", "SupplyRequest.parameter"),
            one("priority", "code"),
            req("quantity", "Quantity"),
            many("reasonCode", "CodeableConcept"),
            many("reasonReference", "Reference"),
            one("requester", "Reference"),
            one("status", "code"),
            many("supplier", "Reference"),
        ],
    ),
    def(
        "SupplyRequest.parameter",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            one("valueBoolean", "boolean"),
            one("valueCodeableConcept", "CodeableConcept"),
            one("valueQuantity", "Quantity"),
            one("valueRange", "Range"),
        ],
    ),
    // Task
    def(
        "Task",
        DOMAIN,
        &[
            one("authoredOn", "dateTime"),
            many("basedOn", "Reference"),
            one("businessStatus", "CodeableConcept"),
            one("code", "CodeableConcept"),
            one("description", "string"),
            one("encounter", "Reference"),
            one("executionPeriod", "Period"),
            one("focus", "Reference"),
            one("for", "Reference"),
            one("groupIdentifier", "Identifier"),
            many("identifier", "Identifier"),
            many("input", "Task.input"),
            one("instantiatesCanonical", "canonical"),
            one("instantiatesUri", "uri"),
            many("insurance", "Reference"),
            req("intent", "code"),
            one("lastModified", "dateTime"),
            one("location", "Reference"),
            many("note", "Annotation"),
            many("output", "Task.output"),
            one("owner", "Reference"),
            many("partOf", "Reference"),
            many("performerType", "CodeableConcept"),
            one("priority", "code"),
            one("reasonCode", "CodeableConcept"),
            one("reasonReference", "Reference"),
            many("relevantHistory", "Reference"),
            one("requester", "Reference"),
            one("restriction", "Task.restriction"),
            req("status", "code"),
            one("statusReason", "CodeableConcept"),
        ],
    ),
    def(
        "Task.restriction",
        BACKBONE,
        &[
            one("period", "Period"),
            many("recipient", "Reference"),
            one("repetitions", "positiveInt"),
        ],
    ),
    def(
        "Task.input",
        BACKBONE,
        &[
            req("type", "CodeableConcept"),
            req("valueAddress", "Address"),
            req("valueAge", "Age"),
            req("valueAnnotation", "Annotation"),
            req("valueAttachment", "Attachment"),
            req("valueBase64Binary", "base64Binary"),
            req("valueBoolean", "boolean"),
            req("valueCanonical", "canonical"),
            req("valueCode", "code"),
            req("valueCodeableConcept", "CodeableConcept"),
            req("valueCoding", "Coding"),
            req("valueContactDetail", "ContactDetail"),
            req("valueContactPoint", "ContactPoint"),
            req("valueContributor", "Contributor"),
            req("valueCount", "Count"),
            req("valueDataRequirement", "DataRequirement"),
            req("valueDate", "date"),
            req("valueDateTime", "dateTime"),
            req("valueDecimal", "decimal"),
            req("valueDistance", "Distance"),
            req("valueDosage", "Dosage"),
            req("valueDuration", "Duration"),
            req("valueExpression", "Expression"),
            req("valueHumanName", "HumanName"),
            req("valueId", "id"),
            req("valueIdentifier", "Identifier"),
            req("valueInstant", "instant"),
            req("valueInteger", "integer"),
            req("valueMarkdown", "markdown"),
            req("valueMeta", "Meta"),
            req("valueMoney", "Money"),
            req("valueOid", "oid"),
            req("valueParameterDefinition", "ParameterDefinition"),
            req("valuePeriod", "Period"),
            req("valuePositiveInt", "positiveInt"),
            req("valueQuantity", "Quantity"),
            req("valueRange", "Range"),
            req("valueRatio", "Ratio"),
            req("valueReference", "Reference"),
            req("valueRelatedArtifact", "RelatedArtifact"),
            req("valueSampledData", "SampledData"),
            req("valueSignature", "Signature"),
            req("valueString", "string"),
            req("valueTime", "time"),
            req("valueTiming", "Timing"),
            req("valueTriggerDefinition", "TriggerDefinition"),
            req("valueUnsignedInt", "unsignedInt"),
            req("valueUri", "uri"),
            req("valueUrl", "url"),
            req("valueUsageContext", "UsageContext"),
            req("valueUuid", "uuid"),
        ],
    ),
    def(
        "Task.output",
        BACKBONE,
        &[
            req("type", "CodeableConcept"),
            req("valueAddress", "Address"),
            req("valueAge", "Age"),
            req("valueAnnotation", "Annotation"),
            req("valueAttachment", "Attachment"),
            req("valueBase64Binary", "base64Binary"),
            req("valueBoolean", "boolean"),
            req("valueCanonical", "canonical"),
            req("valueCode", "code"),
            req("valueCodeableConcept", "CodeableConcept"),
            req("valueCoding", "Coding"),
            req("valueContactDetail", "ContactDetail"),
            req("valueContactPoint", "ContactPoint"),
            req("valueContributor", "Contributor"),
            req("valueCount", "Count"),
            req("valueDataRequirement", "DataRequirement"),
            req("valueDate", "date"),
            req("valueDateTime", "dateTime"),
            req("valueDecimal", "decimal"),
            req("valueDistance", "Distance"),
            req("valueDosage", "Dosage"),
            req("valueDuration", "Duration"),
            req("valueExpression", "Expression"),
            req("valueHumanName", "HumanName"),
            req("valueId", "id"),
            req("valueIdentifier", "Identifier"),
            req("valueInstant", "instant"),
            req("valueInteger", "integer"),
            req("valueMarkdown", "markdown"),
            req("valueMeta", "Meta"),
            req("valueMoney", "Money"),
            req("valueOid", "oid"),
            req("valueParameterDefinition", "ParameterDefinition"),
            req("valuePeriod", "Period"),
            req("valuePositiveInt", "positiveInt"),
            req("valueQuantity", "Quantity"),
            req("valueRange", "Range"),
            req("valueRatio", "Ratio"),
            req("valueReference", "Reference"),
            req("valueRelatedArtifact", "RelatedArtifact"),
            req("valueSampledData", "SampledData"),
            req("valueSignature", "Signature"),
            req("valueString", "string"),
            req("valueTime", "time"),
            req("valueTiming", "Timing"),
            req("valueTriggerDefinition", "TriggerDefinition"),
            req("valueUnsignedInt", "unsignedInt"),
            req("valueUri", "uri"),
            req("valueUrl", "url"),
            req("valueUsageContext", "UsageContext"),
            req("valueUuid", "uuid"),
        ],
    ),
    // TerminologyCapabilities
    def(
        "TerminologyCapabilities",
        DOMAIN,
        &[
            one("closure", "TerminologyCapabilities.closure"),
            one("codeSearch", "code"),
            many("codeSystem", "TerminologyCapabilities.codeSystem"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            req("date", "dateTime"),
            one("description", "markdown"),
            one("expansion", "TerminologyCapabilities.expansion"),
            one("experimental", "boolean"),
            one("implementation", "TerminologyCapabilities.implementation"),
            many("jurisdiction", "CodeableConcept"),
            req("kind", "code"),
            one("lockedDate", "boolean"),
            one("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            one("software", "TerminologyCapabilities.software"),
            req("status", "code"),
            one("title", "string"),
            one("translation", "TerminologyCapabilities.translation"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("validateCode", "TerminologyCapabilities.validateCode"),
            one("version", "string"),
        ],
    ),
    def(
        "TerminologyCapabilities.software",
        BACKBONE,
        &[req("name", "string"), one("version", "string")],
    ),
    def(
        "TerminologyCapabilities.implementation",
        BACKBONE,
        &[req("description", "string"), one("url", "url")],
    ),
    def(
        "TerminologyCapabilities.codeSystem",
        BACKBONE,
        &[
            one("subsumption", "boolean"),
            one("uri", "canonical"),
            many("version", "TerminologyCapabilities.codeSystem.version"),
        ],
    ),
    def(
        "TerminologyCapabilities.codeSystem.version",
        BACKBONE,
        &[
            one("code", "string"),
            one("compositional", "boolean"),
            many("filter", "TerminologyCapabilities.codeSystem.version.filter"),
            one("isDefault", "boolean"),
            many("language", "code"),
            many("property", "code"),
        ],
    ),
    def(
        "TerminologyCapabilities.codeSystem.version.filter",
        BACKBONE,
        &[req("code", "code"), req_many("op", "code")],
    ),
    def(
        "TerminologyCapabilities.expansion",
        BACKBONE,
        &[
            one("hierarchical", "boolean"),
            one("incomplete", "boolean"),
            one("paging", "boolean"),
            many("parameter", "TerminologyCapabilities.expansion.parameter"),
            one("textFilter", "markdown"),
        ],
    ),
    def(
        "TerminologyCapabilities.expansion.parameter",
        BACKBONE,
        &[one("documentation", "string"), req("name", "code")],
    ),
    def(
        "TerminologyCapabilities.validateCode",
        BACKBONE,
        &[req("translations", "boolean")],
    ),
    def(
        "TerminologyCapabilities.translation",
        BACKBONE,
        &[req("needsMap", "boolean")],
    ),
    def(
        "TerminologyCapabilities.closure",
        BACKBONE,
        &[one("translation", "boolean")],
    ),
    // TestReport
    def(
        "TestReport",
        DOMAIN,
        &[
            one("identifier", "Identifier"),
            one("issued", "dateTime"),
            one("name", "string"),
            many("participant", "TestReport.participant"),
            req("result", "code"),
            one("score", "decimal"),
            one("setup", "TestReport.setup"),
            req("status", "code"),
            one("teardown", "TestReport.teardown"),
            many("test", "TestReport.test"),
            req("testScript", "Reference"),
            one("tester", "string"),
        ],
    ),
    def(
        "TestReport.participant",
        BACKBONE,
        &[
            one("display", "string"),
            req("type", "code"),
            req("uri", "uri"),
        ],
    ),
    def(
        "TestReport.setup",
        BACKBONE,
        &[req_many("action", "TestReport.setup.action")],
    ),
    def(
        "TestReport.setup.action",
        BACKBONE,
        &[
            one("assert", "TestReport.setup.action.assert"),
            one("operation", "TestReport.setup.action.operation"),
        ],
    ),
    def(
        "TestReport.setup.action.operation",
        BACKBONE,
        &[
            one("detail", "uri"),
            one("message", "markdown"),
            req("result", "code"),
        ],
    ),
    def(
        "TestReport.setup.action.assert",
        BACKBONE,
        &[
            one("detail", "string"),
            one("message", "markdown"),
            req("result", "code"),
        ],
    ),
    def(
        "TestReport.test",
        BACKBONE,
        &[
            req_many("action", "TestReport.test.action"),
            one("description", "string"),
            one("name", "string"),
        ],
    ),
    def(
        "TestReport.test.action",
        BACKBONE,
        &[
            one("assert", "TestReport.setup.action.assert"),
            one("operation", "TestReport.setup.action.operation"),
        ],
    ),
    def(
        "TestReport.teardown",
        BACKBONE,
        &[req_many("action", "TestReport.teardown.action")],
    ),
    def(
        "TestReport.teardown.action",
        BACKBONE,
        &[req("operation", "TestReport.setup.action.operation")],
    ),
    // TestScript
    def(
        "TestScript",
        DOMAIN,
        &[
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            many("destination", "TestScript.destination"),
            one("experimental", "boolean"),
            many("fixture", "TestScript.fixture"),
            one("identifier", "Identifier"),
            many("jurisdiction", "CodeableConcept"),
            one("metadata", "TestScript.metadata"),
            req("name", "string"),
            many("origin", "TestScript.origin"),
            many("profile", "Reference"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            one("setup", "TestScript.setup"),
            req("status", "code"),
            one("teardown", "TestScript.teardown"),
            many("test", "TestScript.test"),
            one("title", "string"),
            req("url", "uri"),
            many("useContext", "UsageContext"),
            many("variable", "TestScript.variable"),
            one("version", "string"),
        ],
    ),
    def(
        "TestScript.origin",
        BACKBONE,
        &[req("index", "integer"), req("profile", "Coding")],
    ),
    def(
        "TestScript.destination",
        BACKBONE,
        &[req("index", "integer"), req("profile", "Coding")],
    ),
    def(
        "TestScript.metadata",
        BACKBONE,
        &[
            req_many("capability", "TestScript.metadata.capability"),
            many("link", "TestScript.metadata.link"),
        ],
    ),
    def(
        "TestScript.metadata.link",
        BACKBONE,
        &[one("description", "string"), req("url", "uri")],
    ),
    def(
        "TestScript.metadata.capability",
        BACKBONE,
        &[
            req("capabilities", "canonical"),
            one("description", "string"),
            one("destination", "integer"),
            many("link", "uri"),
            many("origin", "integer"),
            req("required", "boolean"),
            req("validated", "boolean"),
        ],
    ),
    def(
        "TestScript.fixture",
        BACKBONE,
        &[
            req("autocreate", "boolean"),
            req("autodelete", "boolean"),
            one("resource", "Reference"),
        ],
    ),
    def(
        "TestScript.variable",
        BACKBONE,
        &[
            one("defaultValue", "string"),
            one("description", "string"),
            one("expression", "string"),
            one("headerField", "string"),
            one("hint", "string"),
            req("name", "string"),
            one("path", "string"),
            one("sourceId", "id"),
        ],
    ),
    def(
        "TestScript.setup",
        BACKBONE,
        &[req_many("action", "TestScript.setup.action")],
    ),
    def(
        "TestScript.setup.action",
        BACKBONE,
        &[
            one("assert", "TestScript.setup.action.assert"),
            one("operation", "TestScript.setup.action.operation"),
        ],
    ),
    def(
        "TestScript.setup.action.operation",
        BACKBONE,
        &[
            one("accept", "code"),
            one("contentType", "code"),
            one("description", "string"),
            one("destination", "integer"),
            req("encodeRequestUrl", "boolean"),
            one("label", "string"),
            one("method", "code"),
            one("origin", "integer"),
            one("params", "string"),
            many("requestHeader", "TestScript.setup.action.operation.requestHeader"),
            one("requestId", "id"),
            one("resource", "code"),
            one("responseId", "id"),
            one("sourceId", "id"),
            one("targetId", "id"),
            one("type", "Coding"),
            one("url", "string"),
        ],
    ),
    def(
        "TestScript.setup.action.operation.requestHeader",
        BACKBONE,
        &[req("field", "string"), req("value", "string")],
    ),
    def(
        "TestScript.setup.action.assert",
        BACKBONE,
        &[
            one("compareToSourceExpression", "string"),
            one("compareToSourceId", "string"),
            one("compareToSourcePath", "string"),
            one("contentType", "code"),
            one("description", "string"),
            one("direction", "code"),
            one("expression", "string"),
            one("headerField", "string"),
            one("label", "string"),
            one("minimumId", "string"),
            one("navigationLinks", "boolean"),
            one("operator", "code"),
            one("path", "string"),
            one("requestMethod", "code"),
            one("requestURL", "string"),
            one("resource", "code"),
            one("response", "code"),
            one("responseCode", "string"),
            one("sourceId", "id"),
            one("validateProfileId", "id"),
            one("value", "string"),
            req("warningOnly", "boolean"),
        ],
    ),
    def(
        "TestScript.test",
        BACKBONE,
        &[
            req_many("action", "TestScript.test.action"),
            one("description", "string"),
            one("name", "string"),
        ],
    ),
    def(
        "TestScript.test.action",
        BACKBONE,
        &[
            one("assert", "TestScript.setup.action.assert"),
            one("operation", "TestScript.setup.action.operation"),
        ],
    ),
    def(
        "TestScript.teardown",
        BACKBONE,
        &[req_many("action", "TestScript.teardown.action")],
    ),
    def(
        "TestScript.teardown.action",
        BACKBONE,
        &[req("operation", "TestScript.setup.action.operation")],
    ),
    // ValueSet
    def(
        "ValueSet",
        DOMAIN,
        &[
            one("compose", "ValueSet.compose"),
            many("contact", "ContactDetail"),
            one("copyright", "markdown"),
            one("date", "dateTime"),
            one("description", "markdown"),
            one("expansion", "ValueSet.expansion"),
            one("experimental", "boolean"),
            many("identifier", "Identifier"),
            one("immutable", "boolean"),
            many("jurisdiction", "CodeableConcept"),
            one("name", "string"),
            one("publisher", "string"),
            one("purpose", "markdown"),
            req("status", "code"),
            one("title", "string"),
            one("url", "uri"),
            many("useContext", "UsageContext"),
            one("version", "string"),
        ],
    ),
    def(
        "ValueSet.compose",
        BACKBONE,
        &[
            many("exclude", "ValueSet.compose.include"),
            one("inactive", "boolean"),
            req_many("include", "ValueSet.compose.include"),
            one("lockedDate", "date"),
        ],
    ),
    def(
        "ValueSet.compose.include",
        BACKBONE,
        &[
            many("concept", "ValueSet.compose.include.concept"),
            many("filter", "ValueSet.compose.include.filter"),
            one("system", "uri"),
            many("valueSet", "canonical"),
            one("version", "string"),
        ],
    ),
    def(
        "ValueSet.compose.include.concept",
        BACKBONE,
        &[
            req("code", "code"),
            many("designation", "ValueSet.compose.include.concept.designation"),
            one("display", "string"),
        ],
    ),
    def(
        "ValueSet.compose.include.concept.designation",
        BACKBONE,
        &[
            one("language", "code"),
            one("use", "Coding"),
            req("value", "string"),
        ],
    ),
    def(
        "ValueSet.compose.include.filter",
        BACKBONE,
        &[
            req("op", "code"),
            req("property", "code"),
            req("value", "string"),
        ],
    ),
    def(
        "ValueSet.expansion",
        BACKBONE,
        &[
            many("contains", "ValueSet.expansion.contains"),
            one("identifier", "uri"),
            one("offset", "integer"),
            many("parameter", "ValueSet.expansion.parameter"),
            req("timestamp", "dateTime"),
            one("total", "integer"),
        ],
    ),
    def(
        "ValueSet.expansion.parameter",
        BACKBONE,
        &[
            req("name", "string"),
            one("valueBoolean", "boolean"),
            one("valueCode", "code"),
            one("valueDateTime", "dateTime"),
            one("valueDecimal", "decimal"),
            one("valueInteger", "integer"),
            one("valueString", "string"),
            one("valueUri", "uri"),
        ],
    ),
    def(
        "ValueSet.expansion.contains",
        BACKBONE,
        &[
            one("abstract", "boolean"),
            one("code", "code"),
            many("contains", "ValueSet.expansion.contains"),
            many("designation", "ValueSet.compose.include.concept.designation"),
            one("display", "string"),
            one("inactive", "boolean"),
            one("system", "uri"),
            one("version", "string"),
        ],
    ),
    // VerificationResult
    def(
        "VerificationResult",
        DOMAIN,
        &[
            one("attestation", "VerificationResult.attestation"),
            one("failureAction", "CodeableConcept"),
            one("frequency", "Timing"),
            one("lastPerformed", "dateTime"),
            one("need", "CodeableConcept"),
            one("nextScheduled", "date"),
            many("primarySource", "VerificationResult.primarySource"),
            req("status", "code"),
            one("statusDate", "dateTime"),
            many("target", "Reference"),
            many("targetLocation", "string"),
            many("validationProcess", "CodeableConcept"),
            one("validationType", "CodeableConcept"),
            many("validator", "VerificationResult.validator"),
        ],
    ),
    def(
        "VerificationResult.primarySource",
        BACKBONE,
        &[
            one("canPushUpdates", "CodeableConcept"),
            many("communicationMethod", "CodeableConcept"),
            many("pushTypeAvailable", "CodeableConcept"),
            many("type", "CodeableConcept"),
            one("validationDate", "dateTime"),
            one("validationStatus", "CodeableConcept"),
            one("who", "Reference"),
        ],
    ),
    def(
        "VerificationResult.attestation",
        BACKBONE,
        &[
            one("communicationMethod", "CodeableConcept"),
            one("date", "date"),
            one("onBehalfOf", "Reference"),
            one("proxyIdentityCertificate", "string"),
            one("proxySignature", "Signature"),
            one("sourceIdentityCertificate", "string"),
            one("sourceSignature", "Signature"),
            one("who", "Reference"),
        ],
    ),
    def(
        "VerificationResult.validator",
        BACKBONE,
        &[
            one("attestationSignature", "Signature"),
            one("identityCertificate", "string"),
            req("organization", "Reference"),
        ],
    ),
    // VisionPrescription
    def(
        "VisionPrescription",
        DOMAIN,
        &[
            req("created", "dateTime"),
            req("dateWritten", "dateTime"),
            one("encounter", "Reference"),
            many("identifier", "Identifier"),
            req_many("lensSpecification", "VisionPrescription.lensSpecification"),
            req("patient", "Reference"),
            req("prescriber", "Reference"),
            req("status", "code"),
        ],
    ),
    def(
        "VisionPrescription.lensSpecification",
        BACKBONE,
        &[
            one("add", "decimal"),
            one("axis", "integer"),
            one("backCurve", "decimal"),
            one("brand", "string"),
            one("color", "string"),
            one("cylinder", "decimal"),
            one("diameter", "decimal"),
            one("duration", "Quantity"),
            req("eye", "code"),
            many("note", "Annotation"),
            one("power", "decimal"),
            many("prism", "VisionPrescription.lensSpecification.prism"),
            req("product", "CodeableConcept"),
            one("sphere", "decimal"),
        ],
    ),
    def(
        "VisionPrescription.lensSpecification.prism",
        BACKBONE,
        &[req("amount", "decimal"), req("base", "code")],
    ),
];
