//! General-purpose, metadata, and special-purpose datatypes

use super::{def, many, one, req, req_many, TypeDefinition};

const ELEMENT: Option<&str> = Some("Element");
const BACKBONE: Option<&str> = Some("BackboneElement");
const QUANTITY: Option<&str> = Some("Quantity");

pub(super) static TYPES: &[TypeDefinition] = &[
    def(
        "Element",
        None,
        &[many("extension", "Extension"), one("id", "string")],
    ),
    def(
        "BackboneElement",
        ELEMENT,
        &[many("modifierExtension", "Extension")],
    ),
    def(
        "Extension",
        ELEMENT,
        &[
            req("url", "uri"),
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
    def(
        "Narrative",
        ELEMENT,
        &[req("div", "xhtml"), req("status", "code")],
    ),
    def(
        "Meta",
        ELEMENT,
        &[
            one("lastUpdated", "instant"),
            many("profile", "canonical"),
            many("security", "Coding"),
            one("source", "uri"),
            many("tag", "Coding"),
            one("versionId", "id"),
        ],
    ),
    def(
        "Address",
        ELEMENT,
        &[
            one("city", "string"),
            one("country", "string"),
            one("district", "string"),
            many("line", "string"),
            one("period", "Period"),
            one("postalCode", "string"),
            one("state", "string"),
            one("text", "string"),
            one("type", "code"),
            one("use", "code"),
        ],
    ),
    def(
        "Quantity",
        ELEMENT,
        &[
            one("code", "code"),
            one("comparator", "code"),
            one("system", "uri"),
            one("unit", "string"),
            one("value", "decimal"),
        ],
    ),
    def("Age", QUANTITY, &[]),
    def("Count", QUANTITY, &[]),
    def("Distance", QUANTITY, &[]),
    def("Duration", QUANTITY, &[]),
    def(
        "Annotation",
        ELEMENT,
        &[
            one("authorReference", "Reference"),
            one("authorString", "string"),
            req("text", "markdown"),
            one("time", "dateTime"),
        ],
    ),
    def(
        "Attachment",
        ELEMENT,
        &[
            one("contentType", "code"),
            one("creation", "dateTime"),
            one("data", "base64Binary"),
            one("hash", "base64Binary"),
            one("language", "code"),
            one("size", "unsignedInt"),
            one("title", "string"),
            one("url", "url"),
        ],
    ),
    def(
        "CodeableConcept",
        ELEMENT,
        &[many("coding", "Coding"), one("text", "string")],
    ),
    def(
        "Coding",
        ELEMENT,
        &[
            one("code", "code"),
            one("display", "string"),
            one("system", "uri"),
            one("userSelected", "boolean"),
            one("version", "string"),
        ],
    ),
    def(
        "ContactPoint",
        ELEMENT,
        &[
            one("period", "Period"),
            one("rank", "positiveInt"),
            one("system", "code"),
            one("use", "code"),
            one("value", "string"),
        ],
    ),
    def(
        "HumanName",
        ELEMENT,
        &[
            one("family", "string"),
            many("given", "string"),
            one("period", "Period"),
            many("prefix", "string"),
            many("suffix", "string"),
            one("text", "string"),
            one("use", "code"),
        ],
    ),
    def(
        "Identifier",
        ELEMENT,
        &[
            one("assigner", "Reference"),
            one("period", "Period"),
            one("system", "uri"),
            one("type", "CodeableConcept"),
            one("use", "code"),
            one("value", "string"),
        ],
    ),
    def(
        "Money",
        ELEMENT,
        &[one("currency", "code"), one("value", "decimal")],
    ),
    def(
        "Period",
        ELEMENT,
        &[one("end", "dateTime"), one("start", "dateTime")],
    ),
    def(
        "Range",
        ELEMENT,
        &[one("high", "Quantity"), one("low", "Quantity")],
    ),
    def(
        "Ratio",
        ELEMENT,
        &[one("denominator", "Quantity"), one("numerator", "Quantity")],
    ),
    def(
        "Reference",
        ELEMENT,
        &[
            one("display", "string"),
            one("identifier", "Identifier"),
            one("reference", "string"),
            one("type", "uri"),
        ],
    ),
    def(
        "SampledData",
        ELEMENT,
        &[
            one("data", "string"),
            req("dimensions", "positiveInt"),
            one("factor", "decimal"),
            one("lowerLimit", "decimal"),
            req("origin", "Quantity"),
            req("period", "decimal"),
            one("upperLimit", "decimal"),
        ],
    ),
    def(
        "Signature",
        ELEMENT,
        &[
            one("data", "base64Binary"),
            one("onBehalfOf", "Reference"),
            one("sigFormat", "code"),
            one("targetFormat", "code"),
            req_many("type", "Coding"),
            req("when", "instant"),
            req("who", "Reference"),
        ],
    ),
    def(
        "Timing",
        BACKBONE,
        &[
            one("code", "CodeableConcept"),
            many("event", "dateTime"),
            one("repeat", "Timing.repeat"),
        ],
    ),
    def(
        "Timing.repeat",
        ELEMENT,
        &[
            one("boundsDuration", "Duration"),
            one("boundsPeriod", "Period"),
            one("boundsRange", "Range"),
            one("count", "positiveInt"),
            one("countMax", "positiveInt"),
            many("dayOfWeek", "code"),
            one("duration", "decimal"),
            one("durationMax", "decimal"),
            one("durationUnit", "code"),
            one("frequency", "positiveInt"),
            one("frequencyMax", "positiveInt"),
            one("offset", "unsignedInt"),
            one("period", "decimal"),
            one("periodMax", "decimal"),
            one("periodUnit", "code"),
            many("timeOfDay", "time"),
            many("when", "code"),
        ],
    ),
    def(
        "Dosage",
        BACKBONE,
        &[
            many("additionalInstruction", "CodeableConcept"),
            one("asNeededBoolean", "boolean"),
            one("asNeededCodeableConcept", "CodeableConcept"),
            many("doseAndRate", "Dosage.doseAndRate"),
            one("maxDosePerAdministration", "Quantity"),
            one("maxDosePerLifetime", "Quantity"),
            one("maxDosePerPeriod", "Ratio"),
            one("method", "CodeableConcept"),
            one("patientInstruction", "string"),
            one("route", "CodeableConcept"),
            one("sequence", "integer"),
            one("site", "CodeableConcept"),
            one("text", "string"),
            one("timing", "Timing"),
        ],
    ),
    def(
        "Dosage.doseAndRate",
        ELEMENT,
        &[
            one("doseQuantity", "Quantity"),
            one("doseRange", "Range"),
            one("rateQuantity", "Quantity"),
            one("rateRange", "Range"),
            one("rateRatio", "Ratio"),
            one("type", "CodeableConcept"),
        ],
    ),
    def(
        "ContactDetail",
        ELEMENT,
        &[one("name", "string"), many("telecom", "ContactPoint")],
    ),
    def(
        "Contributor",
        ELEMENT,
        &[
            many("contact", "ContactDetail"),
            req("name", "string"),
            req("type", "code"),
        ],
    ),
    def(
        "DataRequirement",
        ELEMENT,
        &[
            many("codeFilter", "DataRequirement.codeFilter"),
            many("dateFilter", "DataRequirement.dateFilter"),
            one("limit", "positiveInt"),
            many("mustSupport", "string"),
            many("profile", "canonical"),
            many("sort", "DataRequirement.sort"),
            one("subjectCodeableConcept", "CodeableConcept"),
            one("subjectReference", "Reference"),
            req("type", "code"),
        ],
    ),
    def(
        "DataRequirement.codeFilter",
        ELEMENT,
        &[
            many("code", "Coding"),
            one("path", "string"),
            one("searchParam", "string"),
            one("valueSet", "canonical"),
        ],
    ),
    def(
        "DataRequirement.dateFilter",
        ELEMENT,
        &[
            one("path", "string"),
            one("searchParam", "string"),
            one("valueDateTime", "dateTime"),
            one("valueDuration", "Duration"),
            one("valuePeriod", "Period"),
        ],
    ),
    def(
        "DataRequirement.sort",
        ELEMENT,
        &[req("direction", "code"), req("path", "string")],
    ),
    def(
        "Expression",
        ELEMENT,
        &[
            one("description", "string"),
            one("expression", "string"),
            req("language", "code"),
            one("name", "id"),
            one("reference", "uri"),
        ],
    ),
    def(
        "ParameterDefinition",
        ELEMENT,
        &[
            one("documentation", "string"),
            one("max", "string"),
            one("min", "integer"),
            one("name", "code"),
            one("profile", "canonical"),
            req("type", "code"),
            req("use", "code"),
        ],
    ),
    def(
        "RelatedArtifact",
        ELEMENT,
        &[
            one("citation", "markdown"),
            one("display", "string"),
            one("document", "Attachment"),
            one("label", "string"),
            one("resource", "canonical"),
            req("type", "code"),
            one("url", "url"),
        ],
    ),
    def(
        "TriggerDefinition",
        ELEMENT,
        &[
            one("condition", "Expression"),
            many("data", "DataRequirement"),
            one("name", "string"),
            one("timingDate", "date"),
            one("timingDateTime", "dateTime"),
            one("timingReference", "Reference"),
            one("timingTiming", "Timing"),
            req("type", "code"),
        ],
    ),
    def(
        "UsageContext",
        ELEMENT,
        &[
            req("code", "Coding"),
            one("valueCodeableConcept", "CodeableConcept"),
            one("valueQuantity", "Quantity"),
            one("valueRange", "Range"),
            one("valueReference", "Reference"),
        ],
    ),
    def(
        "ElementDefinition",
        BACKBONE,
        &[
            many("alias", "string"),
            one("base", "ElementDefinition.base"),
            one("binding", "ElementDefinition.binding"),
            many("code", "Coding"),
            one("comment", "markdown"),
            many("condition", "id"),
            many("constraint", "ElementDefinition.constraint"),
            one("contentReference", "uri"),
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
            one("definition", "markdown"),
            many("example", "ElementDefinition.example"),
            one("fixedAddress", "Address"),
            one("fixedAge", "Age"),
            one("fixedAnnotation", "Annotation"),
            one("fixedAttachment", "Attachment"),
            one("fixedBase64Binary", "base64Binary"),
            one("fixedBoolean", "boolean"),
            one("fixedCanonical", "canonical"),
            one("fixedCode", "code"),
            one("fixedCodeableConcept", "CodeableConcept"),
            one("fixedCoding", "Coding"),
            one("fixedContactDetail", "ContactDetail"),
            one("fixedContactPoint", "ContactPoint"),
            one("fixedContributor", "Contributor"),
            one("fixedCount", "Count"),
            one("fixedDataRequirement", "DataRequirement"),
            one("fixedDate", "date"),
            one("fixedDateTime", "dateTime"),
            one("fixedDecimal", "decimal"),
            one("fixedDistance", "Distance"),
            one("fixedDosage", "Dosage"),
            one("fixedDuration", "Duration"),
            one("fixedExpression", "Expression"),
            one("fixedHumanName", "HumanName"),
            one("fixedId", "id"),
            one("fixedIdentifier", "Identifier"),
            one("fixedInstant", "instant"),
            one("fixedInteger", "integer"),
            one("fixedMarkdown", "markdown"),
            one("fixedMeta", "Meta"),
            one("fixedMoney", "Money"),
            one("fixedOid", "oid"),
            one("fixedParameterDefinition", "ParameterDefinition"),
            one("fixedPeriod", "Period"),
            one("fixedPositiveInt", "positiveInt"),
            one("fixedQuantity", "Quantity"),
            one("fixedRange", "Range"),
            one("fixedRatio", "Ratio"),
            one("fixedReference", "Reference"),
            one("fixedRelatedArtifact", "RelatedArtifact"),
            one("fixedSampledData", "SampledData"),
            one("fixedSignature", "Signature"),
            one("fixedString", "string"),
            one("fixedTime", "time"),
            one("fixedTiming", "Timing"),
            one("fixedTriggerDefinition", "TriggerDefinition"),
            one("fixedUnsignedInt", "unsignedInt"),
            one("fixedUri", "uri"),
            one("fixedUrl", "url"),
            one("fixedUsageContext", "UsageContext"),
            one("fixedUuid", "uuid"),
            one("isModifier", "boolean"),
            one("isModifierReason", "string"),
            one("isSummary", "boolean"),
            one("label", "string"),
            many("mapping", "ElementDefinition.mapping"),
            one("max", "string"),
            one("maxLength", "integer"),
            one("maxValueDate", "date"),
            one("maxValueDateTime", "dateTime"),
            one("maxValueDecimal", "decimal"),
            one("maxValueInstant", "instant"),
            one("maxValueInteger", "integer"),
            one("maxValuePositiveInt", "positiveInt"),
            one("maxValueQuantity", "Quantity"),
            one("maxValueTime", "time"),
            one("maxValueUnsignedInt", "unsignedInt"),
            one("meaningWhenMissing", "markdown"),
            one("min", "unsignedInt"),
            one("minValueDate", "date"),
            one("minValueDateTime", "dateTime"),
            one("minValueDecimal", "decimal"),
            one("minValueInstant", "instant"),
            one("minValueInteger", "integer"),
            one("minValuePositiveInt", "positiveInt"),
            one("minValueQuantity", "Quantity"),
            one("minValueTime", "time"),
            one("minValueUnsignedInt", "unsignedInt"),
            one("mustSupport", "boolean"),
            one("orderMeaning", "string"),
            req("path", "string"),
            one("patternAddress", "Address"),
            one("patternAge", "Age"),
            one("patternAnnotation", "Annotation"),
            one("patternAttachment", "Attachment"),
            one("patternBase64Binary", "base64Binary"),
            one("patternBoolean", "boolean"),
            one("patternCanonical", "canonical"),
            one("patternCode", "code"),
            one("patternCodeableConcept", "CodeableConcept"),
            one("patternCoding", "Coding"),
            one("patternContactDetail", "ContactDetail"),
            one("patternContactPoint", "ContactPoint"),
            one("patternContributor", "Contributor"),
            one("patternCount", "Count"),
            one("patternDataRequirement", "DataRequirement"),
            one("patternDate", "date"),
            one("patternDateTime", "dateTime"),
            one("patternDecimal", "decimal"),
            one("patternDistance", "Distance"),
            one("patternDosage", "Dosage"),
            one("patternDuration", "Duration"),
            one("patternExpression", "Expression"),
            one("patternHumanName", "HumanName"),
            one("patternId", "id"),
            one("patternIdentifier", "Identifier"),
            one("patternInstant", "instant"),
            one("patternInteger", "integer"),
            one("patternMarkdown", "markdown"),
            one("patternMeta", "Meta"),
            one("patternMoney", "Money"),
            one("patternOid", "oid"),
            one("patternParameterDefinition", "ParameterDefinition"),
            one("patternPeriod", "Period"),
            one("patternPositiveInt", "positiveInt"),
            one("patternQuantity", "Quantity"),
            one("patternRange", "Range"),
            one("patternRatio", "Ratio"),
            one("patternReference", "Reference"),
            one("patternRelatedArtifact", "RelatedArtifact"),
            one("patternSampledData", "SampledData"),
            one("patternSignature", "Signature"),
            one("patternString", "string"),
            one("patternTime", "time"),
            one("patternTiming", "Timing"),
            one("patternTriggerDefinition", "TriggerDefinition"),
            one("patternUnsignedInt", "unsignedInt"),
            one("patternUri", "uri"),
            one("patternUrl", "url"),
            one("patternUsageContext", "UsageContext"),
            one("patternUuid", "uuid"),
            many("representation", "code"),
            one("requirements", "markdown"),
            one("short", "string"),
            one("sliceIsConstraining", "boolean"),
            one("sliceName", "string"),
            one("slicing", "ElementDefinition.slicing"),
            many("type", "ElementDefinition.type"),
        ],
    ),
    def(
        "ElementDefinition.slicing",
        ELEMENT,
        &[
            one("description", "string"),
            many("discriminator", "ElementDefinition.slicing.discriminator"),
            one("ordered", "boolean"),
            req("rules", "code"),
        ],
    ),
    def(
        "ElementDefinition.slicing.discriminator",
        ELEMENT,
        &[req("path", "string"), req("type", "code")],
    ),
    def(
        "ElementDefinition.base",
        ELEMENT,
        &[
            req("max", "string"),
            req("min", "unsignedInt"),
            req("path", "string"),
        ],
    ),
    def(
        "ElementDefinition.type",
        ELEMENT,
        &[
            many("aggregation", "code"),
            req("code", "uri"),
            many("profile", "canonical"),
            many("targetProfile", "canonical"),
            one("versioning", "code"),
        ],
    ),
    def(
        "ElementDefinition.example",
        ELEMENT,
        &[
            req("label", "string"),
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
        "ElementDefinition.constraint",
        ELEMENT,
        &[
            one("expression", "string"),
            req("human", "string"),
            req("key", "id"),
            one("requirements", "string"),
            req("severity", "code"),
            one("source", "canonical"),
            one("xpath", "string"),
        ],
    ),
    def(
        "ElementDefinition.binding",
        ELEMENT,
        &[
            one("description", "string"),
            req("strength", "code"),
            one("valueSet", "canonical"),
        ],
    ),
    def(
        "ElementDefinition.mapping",
        ELEMENT,
        &[
            one("comment", "string"),
            req("identity", "id"),
            one("language", "code"),
            req("map", "string"),
        ],
    ),
    def(
        "MarketingStatus",
        BACKBONE,
        &[
            req("country", "CodeableConcept"),
            req("dateRange", "Period"),
            one("jurisdiction", "CodeableConcept"),
            one("restoreDate", "dateTime"),
            req("status", "CodeableConcept"),
        ],
    ),
    def(
        "Population",
        BACKBONE,
        &[
            one("ageCodeableConcept", "CodeableConcept"),
            one("ageRange", "Range"),
            one("gender", "CodeableConcept"),
            one("physiologicalCondition", "CodeableConcept"),
            one("race", "CodeableConcept"),
        ],
    ),
    def(
        "ProdCharacteristic",
        BACKBONE,
        &[
            many("color", "string"),
            one("depth", "Quantity"),
            one("externalDiameter", "Quantity"),
            one("height", "Quantity"),
            many("image", "Attachment"),
            many("imprint", "string"),
            one("nominalVolume", "Quantity"),
            one("scoring", "CodeableConcept"),
            one("shape", "string"),
            one("weight", "Quantity"),
            one("width", "Quantity"),
        ],
    ),
    def(
        "ProductShelfLife",
        BACKBONE,
        &[
            one("identifier", "Identifier"),
            req("period", "Quantity"),
            many("specialPrecautionsForStorage", "CodeableConcept"),
            req("type", "CodeableConcept"),
        ],
    ),
    def(
        "SubstanceAmount",
        BACKBONE,
        &[
            one("amountQuantity", "Quantity"),
            one("amountRange", "Range"),
            one("amountString", "string"),
            one("amountText", "string"),
            one("amountType", "CodeableConcept"),
            one("referenceRange", "SubstanceAmount.referenceRange"),
        ],
    ),
    def(
        "SubstanceAmount.referenceRange",
        ELEMENT,
        &[one("highLimit", "Quantity"), one("lowLimit", "Quantity")],
    ),
];
