//! 生成モデルに渡すプロンプトの組み立て

use crate::jmx::repairer::{INCOMPATIBLE_ELEMENTS, PROBLEMATIC_FIELDS};

/// 全呼び出しに付けるシステム指示
pub const SYSTEM_INSTRUCTION: &str = "You are a performance testing expert assistant. Your role is to:
1. Analyze user requirements for performance testing
2. Suggest optimal test configurations including:
   - Number of users/threads
   - Ramp-up period
   - Test duration
   - Think time
3. Help refine the setup based on user feedback
4. Generate JMeter test plan configurations in .jmx format

Always give concrete values and keep the answer in the requested format.";

/// ドメイン未指定時の既定値
pub const DEFAULT_DOMAIN: &str = "example.com";

/// 対象の JMeter バージョン
pub const JMETER_VERSION: &str = "5.6.3";

/// 最初の提案を求めるプロンプト
pub fn suggestion_prompt(requirement: &str) -> String {
    format!(
        "As a JMeter expert, analyze this test requirement and create a practical test plan: {requirement}

1. You must determine the appropriate test type (load, stress, spike, etc.) based on the requirement
2. Identify the SPECIFIC test parameters relevant to this particular test type
3. Provide EXACT values for each parameter (use concrete numbers, not ranges)
4. Determine what specific information is needed from the user for this test

FORMAT YOUR RESPONSE LIKE THIS (plain text, no markdown):

TEST TYPE: [brief name and one-line description]

TEST PARAMETERS:
- Users/Threads: [number]
- Ramp-up Period: [seconds]
- Duration: [time]
[Add other relevant parameters with specific values]

REQUIRED INFORMATION:
- [Item 1]: [brief description]
- [Item 2]: [brief description]
[List any information you need from the user]

Important:
- Format must be clean and easy to read in a terminal
- No markdown formatting (no *, **, etc.)
- No explanatory text, just the sections above
- Be concise but informative
- Give specific values, not ranges"
    )
}

/// フィードバックで提案を更新させるプロンプト（会話全体を文脈として渡す）
pub fn refinement_prompt(transcript: &str, feedback: &str) -> String {
    format!(
        "Previous conversation:
{transcript}

User feedback: {feedback}

As a JMeter expert, update the test plan based on this feedback.

FORMAT YOUR RESPONSE LIKE THIS (plain text, no markdown):

TEST TYPE: [same as before unless changed by feedback]

TEST PARAMETERS:
- Users/Threads: [number]
- Ramp-up Period: [seconds]
- Duration: [time]
[Include all parameters with updated values based on feedback]

REQUIRED INFORMATION:
- [Item 1]: [description]
- [Item 2]: [description]
[List any information still needed from the user]

Important:
- Format must be clean and easy to read in a terminal
- No markdown formatting (no *, **, etc.)
- No explanatory text
- Keep all unchanged parameters from the previous setup
- Update only the parameters mentioned in the feedback"
    )
}

/// 最終的な .jmx（XML のみ）を生成させるプロンプト
pub fn generation_prompt(transcript: &str, final_setup: &str) -> String {
    let elements = INCOMPATIBLE_ELEMENTS.join(", ");
    let fields = PROBLEMATIC_FIELDS.join(", ");
    format!(
        "Conversation history:
{transcript}

Final test setup:
{final_setup}

As a JMeter expert, create a complete JMeter test plan in XML format based on this setup.

Requirements:
1. Create a JMX file compatible with JMeter {JMETER_VERSION}
2. Include ALL components necessary for the specific test type mentioned
3. Choose the most suitable standard components based on the test requirements
4. Extract ALL parameters from the final setup and use them in the test plan
5. Return ONLY the XML content with no explanations

Important compatibility notes:
- Do NOT use these incompatible elements: {elements}
- DO NOT include these fields in SampleSaveConfiguration: {fields}
- If the domain is not specified, use {DEFAULT_DOMAIN} as the default
- Use JMeter's built-in capabilities for the specific test scenario (database, API, web, etc.)"
    )
}
