//! Response partitioner. Buckets the model's paragraphs into LinkedIn, Twitter and WhatsApp posts.
//!
//! The model is asked to label each section ("LinkedIn:", "Twitter:", ...). The first paragraph
//! mentioning a platform opens that platform's post; unlabeled paragraphs that follow are
//! continuation text for the most recently opened post, until the next one opens.
//!
//! Order-sensitive: sections are expected in LinkedIn → Twitter → WhatsApp order. A response in
//! a different order is misassigned or dropped, never rejected.

use crate::models::post::{GenerationResult, Platform};

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Partitions raw completion text into the three post variants.
///
/// Rules, first match wins for each paragraph:
/// 1. mentions "linkedin" and no LinkedIn post yet → opens LinkedIn
/// 2. mentions "twitter" and no Twitter post yet → opens Twitter
/// 3. mentions "whatsapp" and no WhatsApp post yet → opens WhatsApp
/// 4. LinkedIn open, Twitter not → appended to LinkedIn
/// 5. Twitter open, WhatsApp not → appended to Twitter
/// 6. WhatsApp open → appended to WhatsApp
/// 7. otherwise dropped
///
/// Posts still empty after the scan get the platform's fallback string.
pub fn partition(raw_text: &str) -> GenerationResult {
    let mut linkedin = String::new();
    let mut twitter = String::new();
    let mut whatsapp = String::new();

    for paragraph in raw_text.split(PARAGRAPH_SEPARATOR) {
        let lower = paragraph.to_lowercase();
        let mentions = |platform: Platform| lower.contains(platform.keyword());

        if mentions(Platform::LinkedIn) && linkedin.is_empty() {
            linkedin = paragraph.to_string();
        } else if mentions(Platform::Twitter) && twitter.is_empty() {
            twitter = paragraph.to_string();
        } else if mentions(Platform::WhatsApp) && whatsapp.is_empty() {
            whatsapp = paragraph.to_string();
        } else if !linkedin.is_empty() && twitter.is_empty() {
            append_paragraph(&mut linkedin, paragraph);
        } else if !twitter.is_empty() && whatsapp.is_empty() {
            append_paragraph(&mut twitter, paragraph);
        } else if !whatsapp.is_empty() {
            append_paragraph(&mut whatsapp, paragraph);
        }
    }

    GenerationResult {
        linkedin: or_fallback(linkedin, Platform::LinkedIn),
        twitter: or_fallback(twitter, Platform::Twitter),
        whatsapp: or_fallback(whatsapp, Platform::WhatsApp),
        error: None,
    }
}

fn append_paragraph(post: &mut String, paragraph: &str) {
    post.push_str(PARAGRAPH_SEPARATOR);
    post.push_str(paragraph);
}

fn or_fallback(post: String, platform: Platform) -> String {
    if post.is_empty() {
        platform.fallback().to_string()
    } else {
        post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_posts(result: &GenerationResult, linkedin: &str, twitter: &str, whatsapp: &str) {
        assert_eq!(result.linkedin, linkedin);
        assert_eq!(result.twitter, twitter);
        assert_eq!(result.whatsapp, whatsapp);
        assert!(!result.is_error());
    }

    #[test]
    fn test_empty_input_falls_back_everywhere() {
        let result = partition("");
        assert_posts(
            &result,
            "LinkedIn post not generated.",
            "Twitter post not generated.",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_ordered_labels() {
        let result = partition("LinkedIn: Hello world\n\nTwitter: Hi\n\nWhatsApp: Hey");
        assert_posts(&result, "LinkedIn: Hello world", "Twitter: Hi", "WhatsApp: Hey");
    }

    #[test]
    fn test_linkedin_continuation_until_twitter() {
        let result = partition("LinkedIn: Intro\n\nMore linkedin text\n\nTwitter: Short tweet");
        assert_posts(
            &result,
            "LinkedIn: Intro\n\nMore linkedin text",
            "Twitter: Short tweet",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_late_linkedin_label_still_opens_linkedin() {
        // Label rules are checked before continuation rules.
        let result = partition("Twitter: Hi\n\nLinkedIn: Hello");
        assert_posts(
            &result,
            "LinkedIn: Hello",
            "Twitter: Hi",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_out_of_order_unlabeled_text_is_misassigned() {
        let result = partition("Twitter: Hi\n\nthread continues\n\nLinkedIn: Hello\n\nlong form");
        // LinkedIn is still empty while Twitter is open, so "thread continues" stays with Twitter,
        // and once Twitter is open LinkedIn never receives continuation text.
        assert_posts(
            &result,
            "LinkedIn: Hello",
            "Twitter: Hi\n\nthread continues\n\nlong form",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_whatsapp_first_captures_trailing_text() {
        let result = partition("WhatsApp: a\n\nTwitter: b\n\nmore");
        assert_posts(
            &result,
            "LinkedIn post not generated.",
            "Twitter: b",
            "WhatsApp: a\n\nmore",
        );
    }

    #[test]
    fn test_case_insensitive_labels() {
        let result = partition("**LINKEDIN POST**\n\n**Twitter**\n\n**Whatsapp message**");
        assert_posts(
            &result,
            "**LINKEDIN POST**",
            "**Twitter**",
            "**Whatsapp message**",
        );
    }

    #[test]
    fn test_preamble_before_first_label_is_dropped() {
        let result = partition("Sure! Here are your posts.\n\nLinkedIn: Post");
        assert_posts(
            &result,
            "LinkedIn: Post",
            "Twitter post not generated.",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_no_separator_is_single_paragraph() {
        let result = partition("LinkedIn: one\nTwitter: two\nWhatsApp: three");
        assert_posts(
            &result,
            "LinkedIn: one\nTwitter: two\nWhatsApp: three",
            "Twitter post not generated.",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_unlabeled_text_only_falls_back() {
        let result = partition("Just some text\n\nwith no labels");
        assert_posts(
            &result,
            "LinkedIn post not generated.",
            "Twitter post not generated.",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_repeated_label_appends_as_continuation() {
        let result = partition("LinkedIn: a\n\nLinkedIn again\n\nTwitter: b");
        assert_posts(
            &result,
            "LinkedIn: a\n\nLinkedIn again",
            "Twitter: b",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_twitter_and_whatsapp_continuations() {
        let result = partition(
            "LinkedIn: a\n\nTwitter: b\n\n#rust #async\n\nWhatsApp: c\n\nShare with friends!",
        );
        assert_posts(
            &result,
            "LinkedIn: a",
            "Twitter: b\n\n#rust #async",
            "WhatsApp: c\n\nShare with friends!",
        );
    }

    #[test]
    fn test_whatsapp_before_twitter_swallows_later_text() {
        let result = partition("LinkedIn: a\n\nWhatsApp: c\n\nmore");
        // LinkedIn open and Twitter empty, so "more" continues LinkedIn.
        assert_posts(
            &result,
            "LinkedIn: a\n\nmore",
            "Twitter post not generated.",
            "WhatsApp: c",
        );
    }

    #[test]
    fn test_paragraph_mentioning_two_platforms_opens_first_rule() {
        let result = partition("LinkedIn and Twitter versions below\n\nTwitter: t");
        assert_posts(
            &result,
            "LinkedIn and Twitter versions below",
            "Twitter: t",
            "WhatsApp post not generated.",
        );
    }

    #[test]
    fn test_partition_is_pure() {
        let raw = "LinkedIn: x\n\ny\n\nTwitter: z";
        assert_eq!(partition(raw), partition(raw));
    }

    #[test]
    fn test_all_posts_nonempty_on_success() {
        for raw in ["", "abc", "twitter only", "\n\n\n\n", "WhatsApp: hi\n\nLinkedIn: yo"] {
            let result = partition(raw);
            for platform in Platform::ALL {
                assert!(!result.post(platform).is_empty(), "{raw:?} left {platform:?} empty");
            }
            assert!(!result.is_error());
        }
    }
}
