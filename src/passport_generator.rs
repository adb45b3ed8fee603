use chrono::NaiveDate;
use log::{debug, warn};

use crate::config::GeneratorConfig;
use crate::models::{DataPage, FooterLines, PassportRecord};
use crate::mrz::{format_check_line, format_name_line, CheckSums};
use crate::utils::PassportError;
use crate::validation::FormatValidator;

pub struct DataPageGenerator {
    config: GeneratorConfig,
}

impl DataPageGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        DataPageGenerator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Formats both footer lines without validating the record.
    pub fn footer_lines(&self, record: &PassportRecord) -> FooterLines {
        FooterLines {
            name_line: format_name_line(&record.surname, &record.first_name),
            check_line: format_check_line(
                record.document_version,
                record.document_number,
                record.date_of_birth,
                record.date_of_issue,
            ),
        }
    }

    /// Validates the record and assembles the data page.
    pub fn generate(
        &self,
        record: PassportRecord,
        today: NaiveDate,
    ) -> Result<DataPage, PassportError> {
        let validation = FormatValidator::validate(&record, &self.config, today);
        if !validation.is_valid {
            let messages: Vec<String> = validation.issues.into_iter().map(|i| i.message).collect();
            warn!(
                "rejecting passport {} for {} {}: {}",
                record.document_number,
                record.first_name,
                record.surname,
                messages.join("; ")
            );
            return Err(PassportError::Validation(messages.join("; ")));
        }

        let footer = self.footer_lines(&record);
        let check_digits = CheckSums::new(
            record.document_version,
            record.document_number,
            record.date_of_birth,
            record.date_of_issue,
        )
        .digits();
        debug!(
            "generated footer for passport {}: {} / {}",
            record.document_number, footer.name_line, footer.check_line
        );

        Ok(DataPage {
            record,
            footer,
            check_digits,
            background_url: self.config.background_url(),
            image_url: None,
        })
    }

    /// Marks a page as registered, pointing it at its stored image.
    pub fn register(&self, page: &mut DataPage) {
        let url = self
            .config
            .generated_image_url(u64::from(page.record.document_number));
        debug!("registered passport {} at {}", page.record.document_number, url);
        page.image_url = Some(url);
    }
}
