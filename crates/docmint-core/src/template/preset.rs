//! Built-in template catalog.
//!
//! Provides the system-defined document templates that are available to
//! all users. Each entry here replaces one hand-written screen of the
//! original application; the generic state model consumes them as data.

use super::model::{CollectionSchema, TemplateDefinition};

/// Returns the full built-in template catalog.
pub fn all() -> Vec<TemplateDefinition> {
    vec![
        job_offer(),
        leave_request(),
        newsletter(),
        meeting_minutes(),
        invoice(),
        event_invitation(),
        press_release(),
        recommendation_letter(),
        certificate(),
        social_post(),
    ]
}

/// Looks up a built-in template by its identifier (e.g. `"job-offer"`).
pub fn find(id: &str) -> Option<TemplateDefinition> {
    all().into_iter().find(|t| t.id == id)
}

fn job_offer() -> TemplateDefinition {
    TemplateDefinition::new("job-offer", "Job Offer")
        .field("title", "Senior Software Engineer")
        .field("company", "Acme Inc.")
        .field("location", "Remote")
        .field("salary", "")
        .field("startDate", "")
        .collection(
            CollectionSchema::new("requirements")
                .subfield("icon", "check")
                .subfield("text", "New requirement")
                .row(["check", "5+ years of professional experience"])
                .row(["check", "Strong communication skills"])
                .row(["check", "Experience with distributed systems"])
                .row(["check", "Fluent English"]),
        )
        .collection(
            CollectionSchema::new("benefits")
                .subfield("icon", "star")
                .subfield("text", "New benefit")
                .row(["star", "Flexible working hours"])
                .row(["star", "Health insurance"])
                .row(["star", "Annual training budget"])
                .row(["star", "30 days of paid vacation"]),
        )
}

fn leave_request() -> TemplateDefinition {
    TemplateDefinition::new("leave-request", "Leave Request")
        .field("title", "Leave Request")
        .field("employeeName", "")
        .field("department", "")
        .field("fromDate", "")
        .field("toDate", "")
        .field("reason", "")
        .collection(
            CollectionSchema::new("handovers")
                .subfield("task", "New task")
                .subfield("delegate", "")
                .row(["Ongoing support tickets", "On-call colleague"]),
        )
}

fn newsletter() -> TemplateDefinition {
    TemplateDefinition::new("newsletter", "Newsletter")
        .field("title", "Monthly Newsletter")
        .field("edition", "")
        .field("intro", "")
        .collection(
            CollectionSchema::new("articles")
                .subfield("headline", "New article")
                .subfield("summary", "")
                .row(["Welcome", "A word from the editors"]),
        )
        .collection(
            CollectionSchema::new("hashtags")
                .subfield("tag", "#news")
                .row(["#newsletter"])
                .row(["#monthly"]),
        )
}

fn meeting_minutes() -> TemplateDefinition {
    TemplateDefinition::new("meeting-minutes", "Meeting Minutes")
        .field("title", "Meeting Minutes")
        .field("date", "")
        .field("facilitator", "")
        .collection(
            CollectionSchema::new("attendees")
                .subfield("name", "New attendee")
                .row(["Chair"]),
        )
        .collection(
            CollectionSchema::new("actionItems")
                .subfield("owner", "")
                .subfield("text", "New action item")
                .subfield("due", "")
                .row(["", "Distribute minutes", ""]),
        )
}

fn invoice() -> TemplateDefinition {
    TemplateDefinition::new("invoice", "Invoice")
        .field("title", "Invoice")
        .field("invoiceNumber", "")
        .field("customer", "")
        .field("dueDate", "")
        .collection(
            CollectionSchema::new("lineItems")
                .subfield("description", "New item")
                .subfield("quantity", "1")
                .subfield("unitPrice", "0.00"),
        )
}

fn event_invitation() -> TemplateDefinition {
    TemplateDefinition::new("event-invitation", "Event Invitation")
        .field("title", "You're Invited")
        .field("host", "")
        .field("venue", "")
        .field("date", "")
        .field("time", "")
        .collection(
            CollectionSchema::new("agenda")
                .subfield("time", "")
                .subfield("item", "New agenda item")
                .row(["", "Doors open"])
                .row(["", "Welcome address"]),
        )
}

fn press_release() -> TemplateDefinition {
    TemplateDefinition::new("press-release", "Press Release")
        .field("title", "Press Release")
        .field("subtitle", "")
        .field("city", "")
        .field("date", "")
        .field("body", "")
        .collection(
            CollectionSchema::new("contacts")
                .subfield("name", "New contact")
                .subfield("email", ""),
        )
}

fn recommendation_letter() -> TemplateDefinition {
    TemplateDefinition::new("recommendation-letter", "Recommendation Letter")
        .field("title", "Letter of Recommendation")
        .field("candidate", "")
        .field("referee", "")
        .field("relationship", "")
        .collection(
            CollectionSchema::new("strengths")
                .subfield("text", "New strength")
                .row(["Reliable and self-driven"])
                .row(["Excellent team player"]),
        )
}

fn certificate() -> TemplateDefinition {
    TemplateDefinition::new("certificate", "Certificate")
        .field("title", "Certificate of Completion")
        .field("recipient", "")
        .field("course", "")
        .field("date", "")
        .field("signature", "")
}

fn social_post() -> TemplateDefinition {
    TemplateDefinition::new("social-post", "Social Post")
        .field("title", "New Post")
        .field("body", "")
        .collection(
            CollectionSchema::new("hashtags")
                .subfield("tag", "#post")
                .row(["#announcement"]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = all();
        let mut ids: Vec<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_job_offer() {
        let template = find("job-offer").expect("job-offer preset exists");
        assert_eq!(template.name, "Job Offer");
        let requirements = template.collection_schema("requirements").unwrap();
        let benefits = template.collection_schema("benefits").unwrap();
        assert_eq!(requirements.default_rows.len(), 4);
        assert_eq!(benefits.default_rows.len(), 4);
    }

    #[test]
    fn test_find_unknown_returns_none() {
        assert!(find("no-such-template").is_none());
    }

    #[test]
    fn test_every_row_fits_its_schema() {
        for template in all() {
            for schema in &template.collections {
                for row in &schema.default_rows {
                    assert!(
                        row.len() <= schema.subfields.len(),
                        "template '{}' collection '{}' has an oversized default row",
                        template.id,
                        schema.name
                    );
                }
            }
        }
    }
}
