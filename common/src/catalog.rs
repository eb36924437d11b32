//! Document-type catalog
//!
//! Fixed registry of the legal templates the generator supports. The
//! field order of each entry is the display order and the submission order.

use crate::error::{Error, Result};

/// Title and ordered field list of one document type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTypeDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

impl DocumentTypeDescriptor {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    /// Card caption on the home view
    pub fn fields_caption(&self) -> String {
        format!("{} fields required", self.fields.len())
    }
}

const DOCUMENT_TYPES: &[DocumentTypeDescriptor] = &[
    DocumentTypeDescriptor {
        id: "employment_contract",
        title: "Employment Contract",
        fields: &[
            "employer_name",
            "employee_name",
            "position",
            "start_date",
            "salary",
            "work_location",
            "employment_type",
        ],
    },
    DocumentTypeDescriptor {
        id: "lease_agreement",
        title: "Lease Agreement",
        fields: &[
            "landlord_name",
            "tenant_name",
            "property_address",
            "lease_start",
            "lease_end",
            "monthly_rent",
            "security_deposit",
        ],
    },
    DocumentTypeDescriptor {
        id: "nda",
        title: "Non-Disclosure Agreement",
        fields: &[
            "disclosing_party",
            "receiving_party",
            "effective_date",
            "jurisdiction",
            "term_years",
        ],
    },
    DocumentTypeDescriptor {
        id: "partnership_agreement",
        title: "Partnership Agreement",
        fields: &[
            "partner_one",
            "partner_two",
            "business_name",
            "business_address",
            "start_date",
            "profit_sharing",
            "duration",
        ],
    },
    DocumentTypeDescriptor {
        id: "service_agreement",
        title: "Service Agreement",
        fields: &[
            "service_provider",
            "client_name",
            "service_description",
            "start_date",
            "end_date",
            "payment_amount",
            "payment_terms",
        ],
    },
    DocumentTypeDescriptor {
        id: "settlement_agreement",
        title: "Settlement Agreement",
        fields: &[
            "party_one",
            "party_two",
            "dispute_description",
            "settlement_amount",
            "settlement_date",
            "confidentiality_required",
        ],
    },
    DocumentTypeDescriptor {
        id: "freelance_contract",
        title: "Freelance Contract",
        fields: &[
            "freelancer_name",
            "client_name",
            "project_description",
            "start_date",
            "deadline",
            "total_payment",
            "milestone_payment",
        ],
    },
    DocumentTypeDescriptor {
        id: "terms_of_service",
        title: "Terms of Service",
        fields: &[
            "company_name",
            "website_url",
            "effective_date",
            "governing_law",
            "minimum_age",
        ],
    },
    DocumentTypeDescriptor {
        id: "domicile_agreement",
        title: "Domicile Agreement",
        fields: &[
            "resident_name",
            "property_owner",
            "property_address",
            "start_date",
            "monthly_fee",
            "services_included",
        ],
    },
];

/// All document types in catalog order
pub fn document_types() -> &'static [DocumentTypeDescriptor] {
    DOCUMENT_TYPES
}

/// Look up a document type by identifier
pub fn describe(id: &str) -> Option<&'static DocumentTypeDescriptor> {
    DOCUMENT_TYPES.iter().find(|d| d.id == id)
}

/// Like [`describe`], but unknown identifiers are an error
pub fn require(id: &str) -> Result<&'static DocumentTypeDescriptor> {
    describe(id).ok_or_else(|| Error::UnknownDocumentType(id.to_string()))
}

/// Turn a field identifier into its display label
///
/// Splits on `_` and upper-cases the first character of every piece:
/// `start_date` becomes `Start Date`.
pub fn format_field_label(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Input placeholder for a field
pub fn field_placeholder(field: &str) -> String {
    format!("Enter {}", format_field_label(field).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_type_has_fields() {
        for descriptor in document_types() {
            assert!(!descriptor.fields.is_empty(), "{} has no fields", descriptor.id);
            let again = describe(descriptor.id).unwrap();
            assert_eq!(again, descriptor);
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = document_types().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), document_types().len());
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_describe_nda() {
        let nda = describe("nda").unwrap();
        assert_eq!(nda.title, "Non-Disclosure Agreement");
        assert_eq!(
            nda.fields,
            &["disclosing_party", "receiving_party", "effective_date", "jurisdiction", "term_years"]
        );
        assert_eq!(nda.fields_caption(), "5 fields required");
    }

    #[test]
    fn test_describe_unknown() {
        assert!(describe("will").is_none());
        assert!(matches!(require("will"), Err(Error::UnknownDocumentType(id)) if id == "will"));
    }

    #[test]
    fn test_format_field_label() {
        assert_eq!(format_field_label("start_date"), "Start Date");
        assert_eq!(format_field_label("x"), "X");
        assert_eq!(format_field_label("confidentiality_required"), "Confidentiality Required");
        assert_eq!(format_field_label("website_url"), "Website Url");
    }

    #[test]
    fn test_format_field_label_keeps_empty_pieces() {
        assert_eq!(format_field_label("a__b"), "A  B");
        assert_eq!(format_field_label(""), "");
    }

    #[test]
    fn test_field_placeholder() {
        assert_eq!(field_placeholder("term_years"), "Enter term years");
    }
}
