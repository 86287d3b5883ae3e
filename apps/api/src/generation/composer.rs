//! Template Composer — assembles the markdown post from a `TemplateContext`.
//!
//! Assembly order is fixed: title → meta description → introduction →
//! body sections → conclusion → call to action → keyword footer.
//! Pure and total: no I/O, no randomness, no failure path.

use crate::generation::context::TemplateContext;
use crate::generation::sections::select_sections;

const CALL_TO_ACTION: &str = "**Ready to get started?** Share your thoughts in the comments below, \
                              and don't forget to subscribe for more expert insights!";

/// Composes the full post for an already-resolved context.
pub fn compose(ctx: &TemplateContext) -> String {
    let mut out = String::new();
    write_title(&mut out, ctx);
    write_meta_description(&mut out, ctx);
    write_introduction(&mut out, ctx);
    for section in select_sections(ctx) {
        push_block(&mut out, &format!("## {}", section.title(ctx)));
        push_block(&mut out, &section.body(ctx));
    }
    write_conclusion(&mut out, ctx);
    write_call_to_action(&mut out);
    write_keyword_footer(&mut out, ctx);
    out
}

/// Composes from raw request text, defaulting unrecognized tone/length values.
#[cfg(test)]
pub fn compose_raw(topic: &str, keywords: &str, tone: &str, length: &str) -> String {
    compose(&TemplateContext::from_raw(topic, keywords, tone, length))
}

/// Appends `text` followed by a blank line.
fn push_block(out: &mut String, text: &str) {
    out.push_str(text);
    out.push_str("\n\n");
}

fn write_title(out: &mut String, ctx: &TemplateContext) {
    push_block(out, &format!("# {}", ctx.topic));
}

fn write_meta_description(out: &mut String, ctx: &TemplateContext) {
    let mut line = format!(
        "> **Meta Description:** Discover everything you need to know about {}. ",
        ctx.topic_lower
    );
    if ctx.has_keywords() {
        line.push_str(&format!(
            "Learn about {}, and more. ",
            ctx.leading_keywords(3, ", ")
        ));
    }
    line.push_str("Expert insights and actionable tips.");
    push_block(out, &line);
}

fn write_introduction(out: &mut String, ctx: &TemplateContext) {
    push_block(out, "## Introduction");
    push_block(out, &ctx.tone.intro(&ctx.topic, &ctx.topic_lower));

    let mut filler = format!(
        "This comprehensive guide explores the essential aspects of {}, providing you with \
         actionable insights and expert perspectives. ",
        ctx.topic_lower
    );
    if ctx.has_keywords() {
        filler.push_str(&format!(
            "We'll cover key areas including {}, ensuring you have a complete understanding \
             of this important topic.",
            ctx.leading_keywords(2, " and ")
        ));
    } else {
        filler.push_str(
            "By the end of this article, you'll have a thorough understanding that you can apply immediately.",
        );
    }
    push_block(out, &filler);
}

fn write_conclusion(out: &mut String, ctx: &TemplateContext) {
    push_block(out, "## Conclusion");

    let mut text = format!(
        "{} represents a significant opportunity for those willing to invest the time and \
         resources to implement it effectively. By understanding the core principles, following \
         best practices, and staying adaptable to change, you can achieve remarkable results.\n\n",
        ctx.topic
    );
    if let Some(first) = ctx.first_keyword() {
        text.push_str(&format!("Whether you're focusing on {first}"));
        if let Some(second) = ctx.keywords.get(1) {
            text.push_str(&format!(" or {second}"));
        }
        text.push_str(", ");
    }
    text.push_str(
        "the key is to start with a solid foundation and build incrementally. Take action today, \
         and you'll be well-positioned for success tomorrow.",
    );
    push_block(out, &text);
}

fn write_call_to_action(out: &mut String) {
    push_block(out, "---");
    push_block(out, CALL_TO_ACTION);
}

fn write_keyword_footer(out: &mut String, ctx: &TemplateContext) {
    if ctx.has_keywords() {
        out.push_str(&format!("*Keywords: {}*\n", ctx.keywords.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::length::LengthPreset;
    use crate::generation::sections::SECTIONS;
    use crate::generation::tone::Tone;

    fn body_section_count(doc: &str, ctx: &TemplateContext) -> usize {
        SECTIONS
            .iter()
            .filter(|s| doc.contains(&format!("## {}\n", s.title(ctx))))
            .count()
    }

    #[test]
    fn test_cloud_computing_casual_short_scenario() {
        let ctx = TemplateContext::from_raw("Cloud Computing", "", "casual", "short");
        let doc = compose(&ctx);

        assert!(doc.contains(&Tone::Casual.intro("Cloud Computing", "cloud computing")));
        assert!(!doc.contains("*Keywords:"));
        assert_eq!(body_section_count(&doc, &ctx), 3);
        assert!(doc.contains("## Best Practices and Implementation"));
        assert!(!doc.contains("## Common Challenges and Solutions"));
    }

    #[test]
    fn test_unknown_tone_uses_professional_intro_and_lists_keywords() {
        let doc = compose_raw(
            "Cloud Computing",
            "cloud,  scalability ,cost-effective",
            "unknown-value",
            "medium",
        );

        assert!(doc.contains(&Tone::Professional.intro("Cloud Computing", "cloud computing")));
        let meta = doc
            .lines()
            .find(|l| l.starts_with("> **Meta Description:**"))
            .unwrap();
        assert!(meta.contains("Learn about cloud, scalability, cost-effective, and more."));
        assert!(doc.ends_with("*Keywords: cloud, scalability, cost-effective*\n"));
    }

    #[test]
    fn test_every_tone_intro_is_selected() {
        for tone in Tone::ALL {
            let doc = compose_raw("Edge AI", "", tone.as_str(), "short");
            assert!(doc.contains(&tone.intro("Edge AI", "edge ai")), "{tone:?}");
            for other in Tone::ALL.iter().filter(|t| **t != tone) {
                assert!(!doc.contains(&other.intro("Edge AI", "edge ai")));
            }
        }
    }

    #[test]
    fn test_section_count_follows_length_preset() {
        for preset in LengthPreset::ALL {
            let ctx = TemplateContext::new("Observability", vec![], Tone::Professional, preset);
            let doc = compose(&ctx);
            assert_eq!(body_section_count(&doc, &ctx), preset.section_count());
        }
    }

    #[test]
    fn test_document_skeleton_order() {
        let doc = compose_raw("Observability", "tracing, metrics", "friendly", "long");
        let positions: Vec<usize> = [
            "# Observability\n",
            "> **Meta Description:**",
            "## Introduction",
            "## Understanding Observability",
            "## Future Trends and Considerations",
            "## Conclusion",
            "---",
            "**Ready to get started?**",
            "*Keywords: tracing, metrics*",
        ]
        .iter()
        .map(|marker| doc.find(marker).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_meta_description_without_keywords() {
        let doc = compose_raw("Observability", "", "professional", "short");
        assert!(doc.contains(
            "> **Meta Description:** Discover everything you need to know about observability. \
             Expert insights and actionable tips.\n"
        ));
    }

    #[test]
    fn test_meta_description_caps_at_three_keywords() {
        let doc = compose_raw("Observability", "a, b, c, d", "professional", "short");
        assert!(doc.contains("Learn about a, b, c, and more. "));
    }

    #[test]
    fn test_introduction_filler_branches_on_keywords() {
        let with = compose_raw("Observability", "logs, traces, spans", "casual", "short");
        assert!(with.contains("We'll cover key areas including logs and traces, ensuring"));

        let without = compose_raw("Observability", "", "casual", "short");
        assert!(without.contains("By the end of this article, you'll have a thorough understanding"));
    }

    #[test]
    fn test_conclusion_keyword_callouts() {
        let one = compose_raw("Observability", "logs", "casual", "short");
        assert!(one.contains("Whether you're focusing on logs, the key is"));

        let two = compose_raw("Observability", "logs, traces, spans", "casual", "short");
        assert!(two.contains("Whether you're focusing on logs or traces, the key is"));

        let none = compose_raw("Observability", "", "casual", "short");
        assert!(none.contains("\n\nthe key is to start with a solid foundation"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let a = compose_raw("Rust", "safety, speed", "authoritative", "long");
        let b = compose_raw("Rust", "safety, speed", "authoritative", "long");
        assert_eq!(a, b);
    }

    #[test]
    fn test_without_keywords_document_ends_with_call_to_action() {
        let doc = compose_raw("Rust", "", "casual", "short");
        assert!(doc.ends_with(&format!("{CALL_TO_ACTION}\n\n")));
    }
}
