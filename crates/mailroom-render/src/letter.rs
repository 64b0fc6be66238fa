//! Thank-you letter composition.
//!
//! A letter thanks a donor for one or more gifts, lists every amount and
//! states their total. Totals above the template's emphasis threshold are
//! called out with the emphasis phrase.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_money;

/// The fixed parts of a thank-you letter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterTemplate {
    /// Totals strictly above this amount get the emphasis phrase.
    pub emphasis_threshold: Decimal,
    /// Prefixed to the total when it exceeds the threshold.
    pub emphasis_phrase: String,
    /// What the donations pay for.
    pub cause: String,
    /// The charity's name.
    pub organization: String,
    /// Who signs the letter.
    pub signer: String,
    /// The signer's position at the organization.
    pub signer_title: String,
}

impl Default for LetterTemplate {
    fn default() -> Self {
        Self {
            emphasis_threshold: Decimal::from(500),
            emphasis_phrase: "an incredible".into(),
            cause: "feeding homeless kittens in Seattle".into(),
            organization: "Miuvenile Care".into(),
            signer: "Bungelina Bigglesnorf".into(),
            signer_title: "Chairwoman".into(),
        }
    }
}

impl LetterTemplate {
    /// Compose a letter to `donor` for the given donations.
    ///
    /// Donations are listed in order: all but the last comma-separated,
    /// then `and` and the last one. A single donation is stated on its own
    /// with singular phrasing. An empty slice is treated as one `$0` gift.
    pub fn compose(&self, donor: &str, donations: &[Decimal]) -> String {
        let Some((last, rest)) = donations.split_last() else {
            return self.compose(donor, &[Decimal::ZERO]);
        };
        let total: Decimal = donations.iter().sum();
        let plural = if rest.is_empty() { "" } else { "s" };

        let mut letter = String::new();
        letter.push_str("Dear ");
        letter.push_str(donor);
        letter.push_str(",\nThank you for your generous gift");
        letter.push_str(plural);
        letter.push_str(" of ");
        if !rest.is_empty() {
            let listed: Vec<String> = rest.iter().copied().map(format_money).collect();
            letter.push_str(&listed.join(", "));
            letter.push_str(" and ");
        }
        letter.push_str(&format_money(*last));
        letter.push_str(". Your donation");
        letter.push_str(plural);
        letter.push_str(", totalling ");
        if total > self.emphasis_threshold {
            letter.push_str(&self.emphasis_phrase);
            letter.push(' ');
        }
        letter.push_str(&format_money(total));
        letter.push_str(", will go towards ");
        letter.push_str(&self.cause);
        letter.push_str(". From the bottom of our hearts, we at ");
        letter.push_str(&self.organization);
        letter.push_str(" thank you.\n\nRegards,\n");
        letter.push_str(&self.signer);
        letter.push('\n');
        letter.push_str(&self.signer_title);
        letter.push_str(", ");
        letter.push_str(&self.organization);
        letter
    }
}

/// Compose a letter with the default template.
pub fn compose_letter(donor: &str, donations: &[Decimal]) -> String {
    LetterTemplate::default().compose(donor, donations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn single_gift_letter() {
        let letter = compose_letter("Jane Doe", &[dec!(50)]);
        assert_eq!(
            letter,
            "Dear Jane Doe,\n\
             Thank you for your generous gift of $50. Your donation, totalling $50, \
             will go towards feeding homeless kittens in Seattle. From the bottom of \
             our hearts, we at Miuvenile Care thank you.\n\n\
             Regards,\nBungelina Bigglesnorf\nChairwoman, Miuvenile Care"
        );
    }

    #[test]
    fn two_gifts_use_and() {
        let letter = compose_letter("Dad", &[dec!(20), dec!(5)]);
        assert!(letter.contains("generous gifts of $20 and $5."));
        assert!(letter.contains("Your donations, totalling $25,"));
    }

    #[test]
    fn many_gifts_are_comma_joined() {
        let letter = compose_letter("Billy Neighbor", &[dec!(0.54), dec!(0.01), dec!(0.25)]);
        assert!(letter.contains("gifts of $0.54, $0.01 and $0.25."));
        assert!(letter.contains("totalling $0.80,"));
    }

    #[test]
    fn emphasis_above_threshold() {
        assert!(compose_letter("A", &[dec!(600)]).contains("totalling an incredible $600,"));
        assert!(compose_letter("A", &[dec!(300), dec!(300)]).contains("an incredible $600"));
    }

    #[test]
    fn no_emphasis_at_or_below_threshold() {
        assert!(!compose_letter("A", &[dec!(400)]).contains("an incredible"));
        assert!(!compose_letter("A", &[dec!(500)]).contains("an incredible"));
    }

    #[test]
    fn empty_history_reads_as_zero_gift() {
        let letter = compose_letter("Nobody", &[]);
        assert!(letter.contains("generous gift of $0. Your donation, totalling $0,"));
    }

    #[test]
    fn custom_template() {
        let template = LetterTemplate {
            emphasis_threshold: dec!(10),
            emphasis_phrase: "a stupendous".into(),
            organization: "Dog Rescue".into(),
            ..LetterTemplate::default()
        };
        let letter = template.compose("Sam", &[dec!(11)]);
        assert!(letter.contains("totalling a stupendous $11,"));
        assert!(letter.ends_with("Chairwoman, Dog Rescue"));
    }

    #[test]
    fn template_from_partial_toml() {
        let template: LetterTemplate = toml::from_str("signer = \"Pat\"\nemphasis_threshold = 1000\n").unwrap();
        assert_eq!(template.signer, "Pat");
        assert_eq!(template.emphasis_threshold, dec!(1000));
        assert_eq!(template.organization, "Miuvenile Care");
    }
}
