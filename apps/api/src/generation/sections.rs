//! Fixed body-section templates, in the order they appear in a post.

use crate::generation::context::TemplateContext;

/// One of the five fixed body sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTemplate {
    Understanding,
    Benefits,
    BestPractices,
    Challenges,
    FutureTrends,
}

/// Candidate sections in output order. The composer takes a prefix of this list.
pub static SECTIONS: [SectionTemplate; 5] = [
    SectionTemplate::Understanding,
    SectionTemplate::Benefits,
    SectionTemplate::BestPractices,
    SectionTemplate::Challenges,
    SectionTemplate::FutureTrends,
];

impl SectionTemplate {
    pub fn title(self, ctx: &TemplateContext) -> String {
        match self {
            SectionTemplate::Understanding => format!("Understanding {}", ctx.topic),
            SectionTemplate::Benefits => "Key Benefits and Advantages".to_string(),
            SectionTemplate::BestPractices => "Best Practices and Implementation".to_string(),
            SectionTemplate::Challenges => "Common Challenges and Solutions".to_string(),
            SectionTemplate::FutureTrends => "Future Trends and Considerations".to_string(),
        }
    }

    pub fn body(self, ctx: &TemplateContext) -> String {
        let topic = &ctx.topic_lower;
        match self {
            SectionTemplate::Understanding => {
                let closing = match ctx.first_keyword() {
                    Some(k) => format!("Factors such as {k} play a significant role in determining success."),
                    None => "Success depends on careful planning and execution.".to_string(),
                };
                format!(
                    "At its core, {topic} encompasses several critical components that work together \
                     to create meaningful outcomes. Understanding these fundamentals is essential for \
                     anyone looking to leverage this effectively in their work or personal life.\n\n\
                     The key principles revolve around strategic implementation, continuous optimization, \
                     and measurable results. {closing}"
                )
            }
            SectionTemplate::Benefits => format!(
                "Implementing {topic} properly can yield significant benefits:\n\n\
                 - **Improved Efficiency**: Streamline processes and reduce unnecessary overhead\n\
                 - **Cost Effectiveness**: Optimize resource allocation and maximize ROI\n\
                 - **Scalability**: Build solutions that grow with your needs\n\
                 - **Competitive Edge**: Stay ahead in an increasingly competitive market\n\n\
                 Organizations that embrace these principles consistently outperform their peers \
                 by significant margins."
            ),
            SectionTemplate::BestPractices => {
                let alignment = match ctx.second_or_first_keyword() {
                    Some(k) => format!("Consider how {k} aligns with your objectives."),
                    None => "Align your strategy with clear, measurable objectives.".to_string(),
                };
                format!(
                    "Successful implementation requires a systematic approach. Start by assessing your \
                     current situation and identifying specific goals. {alignment}\n\n\
                     Develop a phased implementation plan that allows for testing and refinement. \
                     Monitor key performance indicators throughout the process and be prepared to \
                     adjust your approach based on real-world results."
                )
            }
            SectionTemplate::Challenges => format!(
                "While {topic} offers substantial benefits, organizations often face certain challenges \
                 during implementation. These typically include resource constraints, resistance to \
                 change, and technical complexities.\n\n\
                 The most successful approaches involve:\n\n\
                 1. Clear communication of goals and benefits to all stakeholders\n\
                 2. Adequate training and support systems\n\
                 3. Incremental rollout with continuous feedback loops\n\
                 4. Regular evaluation and optimization cycles"
            ),
            SectionTemplate::FutureTrends => {
                let watch = match ctx.last_of_many_keywords() {
                    Some(k) => format!("Innovations in {k} are particularly worth monitoring."),
                    None => "Keep an eye on industry developments and be ready to adapt.".to_string(),
                };
                format!(
                    "The landscape of {topic} continues to evolve rapidly. Emerging technologies, \
                     changing market dynamics, and shifting user expectations are reshaping how \
                     organizations approach this area.\n\n\
                     Staying informed about these trends and maintaining flexibility in your strategy \
                     will be crucial for long-term success. {watch}"
                )
            }
        }
    }
}

/// The sections included for this context's length preset.
pub fn select_sections(ctx: &TemplateContext) -> &'static [SectionTemplate] {
    &SECTIONS[..ctx.length.section_count()]
}
