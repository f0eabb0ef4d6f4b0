//! Static FHIR R4 structure definitions
//!
//! Each definition lists only its own elements, sorted by JSON name.
//! Inherited elements come from the `base` chain and are listed first.

mod datatypes;
mod resources;

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    /// 0..1
    Optional,
    /// 1..1
    Required,
    /// 0..*
    Many,
    /// 1..*
    RequiredMany,
}

/// One element of a FHIR type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Property {
    pub json_name: &'static str,
    /// A primitive code (`string`, `dateTime`, ...) or a complex type name.
    /// Backbone elements are named by path (`Patient.contact`).
    pub type_code: &'static str,
    pub cardinality: Cardinality,
}

impl Property {
    pub const fn is_list(&self) -> bool {
        matches!(
            self.cardinality,
            Cardinality::Many | Cardinality::RequiredMany
        )
    }

    pub const fn is_required(&self) -> bool {
        matches!(
            self.cardinality,
            Cardinality::Required | Cardinality::RequiredMany
        )
    }
}

#[derive(Debug)]
pub struct TypeDefinition {
    pub name: &'static str,
    pub base: Option<&'static str>,
    pub properties: &'static [Property],
}

impl TypeDefinition {
    /// Every element of the type, inherited ones first
    pub fn all_properties(&self) -> Vec<&'static Property> {
        let mut chain = vec![self.properties];
        let mut base = self.base;
        while let Some(name) = base {
            let Some(parent) = lookup(name) else { break };
            chain.push(parent.properties);
            base = parent.base;
        }
        chain.into_iter().rev().flatten().collect()
    }

    pub fn is_resource(&self) -> bool {
        RESOURCE_NAMES.binary_search(&self.name).is_ok()
    }
}

pub(crate) const fn one(json_name: &'static str, type_code: &'static str) -> Property {
    Property {
        json_name,
        type_code,
        cardinality: Cardinality::Optional,
    }
}

pub(crate) const fn req(json_name: &'static str, type_code: &'static str) -> Property {
    Property {
        json_name,
        type_code,
        cardinality: Cardinality::Required,
    }
}

pub(crate) const fn many(json_name: &'static str, type_code: &'static str) -> Property {
    Property {
        json_name,
        type_code,
        cardinality: Cardinality::Many,
    }
}

pub(crate) const fn req_many(json_name: &'static str, type_code: &'static str) -> Property {
    Property {
        json_name,
        type_code,
        cardinality: Cardinality::RequiredMany,
    }
}

pub(crate) const fn def(
    name: &'static str,
    base: Option<&'static str>,
    properties: &'static [Property],
) -> TypeDefinition {
    TypeDefinition {
        name,
        base,
        properties,
    }
}

/// Every concrete R4 resource type, in name order
pub const RESOURCE_NAMES: &[&str] = &[
    "Account",
    "ActivityDefinition",
    "AdverseEvent",
    "AllergyIntolerance",
    "Appointment",
    "AppointmentResponse",
    "AuditEvent",
    "Basic",
    "Binary",
    "BiologicallyDerivedProduct",
    "BodyStructure",
    "Bundle",
    "CapabilityStatement",
    "CarePlan",
    "CareTeam",
    "CatalogEntry",
    "ChargeItem",
    "ChargeItemDefinition",
    "Claim",
    "ClaimResponse",
    "ClinicalImpression",
    "CodeSystem",
    "Communication",
    "CommunicationRequest",
    "CompartmentDefinition",
    "Composition",
    "ConceptMap",
    "Condition",
    "Consent",
    "Contract",
    "Coverage",
    "CoverageEligibilityRequest",
    "CoverageEligibilityResponse",
    "DetectedIssue",
    "Device",
    "DeviceDefinition",
    "DeviceMetric",
    "DeviceRequest",
    "DeviceUseStatement",
    "DiagnosticReport",
    "DocumentManifest",
    "DocumentReference",
    "EffectEvidenceSynthesis",
    "Encounter",
    "Endpoint",
    "EnrollmentRequest",
    "EnrollmentResponse",
    "EpisodeOfCare",
    "EventDefinition",
    "Evidence",
    "EvidenceVariable",
    "ExampleScenario",
    "ExplanationOfBenefit",
    "FamilyMemberHistory",
    "Flag",
    "Goal",
    "GraphDefinition",
    "Group",
    "GuidanceResponse",
    "HealthcareService",
    "ImagingStudy",
    "Immunization",
    "ImmunizationEvaluation",
    "ImmunizationRecommendation",
    "ImplementationGuide",
    "InsurancePlan",
    "Invoice",
    "Library",
    "Linkage",
    "List",
    "Location",
    "Measure",
    "MeasureReport",
    "Media",
    "Medication",
    "MedicationAdministration",
    "MedicationDispense",
    "MedicationKnowledge",
    "MedicationRequest",
    "MedicationStatement",
    "MedicinalProduct",
    "MedicinalProductAuthorization",
    "MedicinalProductContraindication",
    "MedicinalProductIndication",
    "MedicinalProductIngredient",
    "MedicinalProductInteraction",
    "MedicinalProductManufactured",
    "MedicinalProductPackaged",
    "MedicinalProductPharmaceutical",
    "MedicinalProductUndesirableEffect",
    "MessageDefinition",
    "MessageHeader",
    "MolecularSequence",
    "NamingSystem",
    "NutritionOrder",
    "Observation",
    "ObservationDefinition",
    "OperationDefinition",
    "OperationOutcome",
    "Organization",
    "OrganizationAffiliation",
    "Parameters",
    "Patient",
    "PaymentNotice",
    "PaymentReconciliation",
    "Person",
    "PlanDefinition",
    "Practitioner",
    "PractitionerRole",
    "Procedure",
    "Provenance",
    "Questionnaire",
    "QuestionnaireResponse",
    "RelatedPerson",
    "RequestGroup",
    "ResearchDefinition",
    "ResearchElementDefinition",
    "ResearchStudy",
    "ResearchSubject",
    "RiskAssessment",
    "RiskEvidenceSynthesis",
    "Schedule",
    "SearchParameter",
    "ServiceRequest",
    "Slot",
    "Specimen",
    "SpecimenDefinition",
    "StructureDefinition",
    "StructureMap",
    "Subscription",
    "Substance",
    "SubstanceNucleicAcid",
    "SubstancePolymer",
    "SubstanceProtein",
    "SubstanceReferenceInformation",
    "SubstanceSourceMaterial",
    "SubstanceSpecification",
    "SupplyDelivery",
    "SupplyRequest",
    "Task",
    "TerminologyCapabilities",
    "TestReport",
    "TestScript",
    "ValueSet",
    "VerificationResult",
    "VisionPrescription",
];

static INDEX: LazyLock<FxHashMap<&'static str, &'static TypeDefinition>> = LazyLock::new(|| {
    datatypes::TYPES
        .iter()
        .chain(resources::TYPES)
        .map(|def| (def.name, def))
        .collect()
});

/// Find a datatype, backbone element, or resource by name
pub fn lookup(name: &str) -> Option<&'static TypeDefinition> {
    INDEX.get(name).copied()
}

/// All definitions, in no particular order
pub fn definitions() -> impl Iterator<Item = &'static TypeDefinition> {
    INDEX.values().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherited_properties_come_first() {
        let names: Vec<_> = lookup("Patient.communication")
            .unwrap()
            .all_properties()
            .iter()
            .map(|p| p.json_name)
            .collect();
        assert_eq!(
            names,
            ["extension", "id", "modifierExtension", "language", "preferred"]
        );
    }

    #[test]
    fn quantity_flavors_share_elements() {
        let age = lookup("Age").unwrap().all_properties();
        let quantity = lookup("Quantity").unwrap().all_properties();
        assert_eq!(age, quantity);
    }

    #[test]
    fn every_resource_is_defined() {
        for name in RESOURCE_NAMES {
            let def = lookup(name).unwrap_or_else(|| panic!("{name} missing"));
            assert!(def.is_resource());
            assert!(matches!(def.base, Some("DomainResource" | "Resource")));
        }
        assert_eq!(RESOURCE_NAMES.len(), 146);
        assert!(RESOURCE_NAMES.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!lookup("Coding").unwrap().is_resource());
        assert!(!lookup("DomainResource").unwrap().is_resource());
    }

    #[test]
    fn own_elements_are_sorted_and_unique() {
        for def in definitions() {
            let names: Vec<_> = def.properties.iter().map(|p| p.json_name).collect();
            let mut sorted = names.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(names, sorted, "{}", def.name);
        }
    }

    #[test]
    fn infrastructure_resources_skip_domain_elements() {
        for name in ["Binary", "Bundle", "Parameters"] {
            let def = lookup(name).unwrap();
            assert_eq!(def.base, Some("Resource"));
            assert!(def.all_properties().iter().all(|p| p.json_name != "contained"));
        }
        let entry = lookup("Bundle.entry").unwrap();
        let resource = entry.properties.iter().find(|p| p.json_name == "resource").unwrap();
        assert_eq!(resource.type_code, "Resource");
    }

    #[test]
    fn choice_elements_expand_per_type() {
        let names: Vec<_> = lookup("Parameters.parameter")
            .unwrap()
            .properties
            .iter()
            .map(|p| p.json_name)
            .filter(|name| name.starts_with("value"))
            .collect();
        assert_eq!(names.len(), 50);
        assert!(names.contains(&"valueBoolean"));
        assert!(names.contains(&"valueCodeableConcept"));
    }

    #[test]
    fn cardinality_flags() {
        let link = lookup("Patient.link").unwrap();
        assert!(link.properties.iter().all(|p| p.is_required() && !p.is_list()));
        let signature = lookup("Signature").unwrap();
        let kind = signature.properties.iter().find(|p| p.json_name == "type").unwrap();
        assert!(kind.is_required() && kind.is_list());
    }
}
