//! Static question material. Placeholders use `{name}` and are filled by [`render`].

pub const MCQ_STEMS: &[&str] = &[
    "Which approach best demonstrates advanced {skill} expertise for a {role}?",
    "In a complex {role} project requiring {skill}, what strategy would be most effective?",
    "When implementing {skill} as a {role}, which practice ensures optimal outcomes?",
    "For a {role} facing {skill} challenges, what methodology shows professional competency?",
    "Which {skill} technique would a senior {role} prioritize in high-stakes situations?",
];

pub const MCQ_CONTEXTS: &[&str] = &[
    "enterprise-level implementation",
    "time-critical project delivery",
    "cross-functional team collaboration",
    "stakeholder management scenario",
    "quality assurance framework",
];

pub const MCQ_STEM_SUFFIX: &str = " Consider {context} requirements.";

pub const MCQ_CORRECT: &[&str] = &[
    "Implement comprehensive {skill} strategy with {context} best practices and measurable outcomes",
    "Apply industry-standard {skill} methodology while ensuring {context} alignment",
    "Execute structured {skill} approach with continuous monitoring for {context}",
    "Deploy proven {skill} framework optimized for {context} success",
];

pub const MCQ_DISTRACTORS: &[&str] = &[
    "Use basic {skill} approach without considering {context} implications",
    "Apply outdated {skill} methods that may conflict with {context} needs",
    "Focus primarily on speed rather than {skill} quality in {context}",
    "Implement {skill} without proper {context} validation or testing",
];

pub const MCQ_RATIONALE: &str = "{difficulty}: This tests practical {skill} application in {context}. \
The correct answer demonstrates comprehensive understanding and professional implementation approach for {role} professionals.";

pub struct SaqPrompt {
    pub prompt: &'static str,
    pub focus: &'static str,
}

pub const SAQ_PROMPTS: &[SaqPrompt] = &[
    SaqPrompt {
        prompt: "Analyze a challenging situation where {skill} implementation failed in a {role} context. What lessons would you apply to prevent similar issues?",
        focus: "failure analysis and prevention",
    },
    SaqPrompt {
        prompt: "Design a comprehensive {skill} strategy for a {role} leading a diverse, remote team. Address key considerations and success metrics.",
        focus: "strategic planning and leadership",
    },
    SaqPrompt {
        prompt: "Evaluate the trade-offs between different {skill} approaches when working as a {role} under resource constraints. Justify your recommendation.",
        focus: "critical evaluation and decision-making",
    },
    SaqPrompt {
        prompt: "Describe how you would mentor junior {role}s in developing their {skill} capabilities. Include specific techniques and milestones.",
        focus: "mentoring and knowledge transfer",
    },
    SaqPrompt {
        prompt: "Outline how to integrate {skill} principles with emerging technologies in a {role} position. Consider innovation and risk management.",
        focus: "innovation and technology integration",
    },
];

pub const SAQ_EXPECTED_ANSWER: &str = "A comprehensive response should demonstrate: \
1) Deep understanding of {skill} principles and their application to {focus}, \
2) Specific, actionable strategies relevant to {role} responsibilities, \
3) Consideration of potential challenges and mitigation approaches, \
4) Clear success metrics and evaluation criteria, \
5) Integration with broader organizational objectives.";

pub const SAQ_RUBRIC: &str = "Assessment criteria: {skill} technical knowledge (25%), \
{focus} expertise (25%), Practical application to {role} context (25%), \
Problem-solving methodology (15%), Communication clarity and structure (10%).";

pub struct CaseletScenario {
    pub context: &'static str,
    pub passage: &'static str,
    pub challenge: &'static str,
}

pub const CASELET_SCENARIOS: &[CaseletScenario] = &[
    CaseletScenario {
        context: "merger and acquisition",
        passage: "As a {role}, you're managing {skill} during a complex merger between two companies with different technological infrastructures and cultural approaches. The timeline is aggressive, stakeholders have conflicting priorities, and there's uncertainty about resource allocation post-merger.",
        challenge: "integration and change management",
    },
    CaseletScenario {
        context: "digital transformation",
        passage: "You're a {role} leading {skill} initiatives in a traditional organization undergoing digital transformation. The leadership team has mixed comfort levels with technology, existing systems are legacy-based, and there's resistance to change from long-term employees.",
        challenge: "modernization and adoption",
    },
    CaseletScenario {
        context: "crisis management",
        passage: "As a {role}, you must maintain {skill} excellence during an unexpected crisis that has disrupted normal operations. Resources are limited, remote work is mandatory, and customer expectations remain high despite the challenging circumstances.",
        challenge: "crisis adaptation and continuity",
    },
    CaseletScenario {
        context: "scaling operations",
        passage: "You're a {role} responsible for {skill} as the company scales from startup to enterprise level. The team has grown 300% in six months, processes that worked for 10 people are breaking down with 50+, and maintaining quality while increasing velocity is critical.",
        challenge: "scalability and process optimization",
    },
    CaseletScenario {
        context: "regulatory compliance",
        passage: "As a {role}, you need to ensure {skill} practices meet new industry regulations while maintaining operational efficiency. The compliance requirements are complex, penalties for non-compliance are severe, and the regulations affect multiple aspects of current workflows.",
        challenge: "compliance integration and risk management",
    },
];

pub const CASELET_PROMPTS: &[&str] = &[
    "Develop a comprehensive strategy addressing: 1) Immediate priorities and quick wins, 2) Medium-term roadmap for {challenge}, 3) Stakeholder communication plan, 4) Success metrics and monitoring approach.",
    "Create an action plan that covers: 1) Risk assessment and mitigation strategies, 2) Resource requirements and timeline, 3) Change management approach for {challenge}, 4) Contingency planning for potential setbacks.",
    "Design your approach including: 1) Current state analysis and gap identification, 2) Solution architecture for {challenge}, 3) Implementation phases with dependencies, 4) Quality assurance and feedback mechanisms.",
];

pub const CASELET_RUBRIC: &str = "Evaluation framework: Strategic thinking and situational analysis (20%), \
{skill} technical application and methodology (25%), {challenge} specific expertise (20%), \
Implementation feasibility and planning (20%), Stakeholder management and communication (15%).";

/// Replaces each `{key}` with its value in one left-to-right pass, so
/// substituted text is copied verbatim. Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
