// Prompt and canned-text constants for the critique module.
// Placeholders are `{name}` and are filled by `parser::fill_template`, which never
// rescans substituted values.

/// Roast prompt. Replace `{filename}` and `{resume_text}` before sending.
///
/// The closing `FINAL SCORE: X/100` line is what `parser::extract_score` looks for;
/// keep the two in sync.
pub const ROAST_PROMPT_TEMPLATE: &str = r#"You are the funniest and most brutally honest resume critic alive. Roast the resume below with savage humor, but make every joke land on a real, fixable problem. Think celebrity chef tearing apart a dish: harsh on the surface, invested in the result.

ROASTING RULES:
- Be hilariously brutal but constructive
- Use emojis, food analogies and pop culture references
- Call out specific flaws and pair each one with a specific fix
- Mock buzzwords and corporate filler
- Compare the resume to failed cooking shows, doomed dating profiles and similar disasters
- Give a numerical score out of 100

Resume filename: {filename}
Resume content: {resume_text}

Format your response exactly like this:
🔥 RESUME ROAST INCOMING 🔥

[Your roast, with specific criticisms and advice]

💯 FINAL SCORE: [X]/100

Be savage but educational. Make them laugh while they learn!"#;

/// Stand-in reply when the provider answers with no content.
pub const EMPTY_REPLY_FALLBACK: &str = "AI is taking a coffee break. Try again!";

/// Demo-mode critiques. Replace `{filename}` and `{score}`.
pub const CANNED_CRITIQUES: &[&str] = &[
    r#"🔥 RESUME ROAST INCOMING 🔥

So this is "{filename}". It has the energy of a dating profile from 2003: technically it works, but nobody is swiping right. ✨

🎭 **The Good News:** You have a resume. That already beats the applicants who show up with a napkin and a dream.

🎯 **The Brutal Truth:** It reads like a robot that learned English from LinkedIn posts. "Responsible for managing tasks" is the career equivalent of "I breathed air and occasionally blinked."

🚀 **What To Fix:**
• Add NUMBERS. "Improved efficiency" means nothing; "cut build times by 47%" gets callbacks. 💰
• Trim the skills section to what you can do without searching "how to" first. 🤔
• Open bullets with action verbs: Led, Shipped, Reduced. Not "was present near computers."

💎 **Pro Tip:** A resume tells a story. Right now yours is a grocery list.

💯 FINAL SCORE: {score}/100

*Demo response. Set GROQ_API_KEY to get real AI-powered roasts! 🔥*"#,
    r#"🔥 RESUME ROAST INCOMING 🔥

"{filename}" just hit my desk and I had to put on sunglasses, because the absence of achievements is blinding. ☀️

🎪 **First Impressions:** A magician who forgot the tricks. All setup, no "ta-da".

🍕 **The Pizza Analogy:** You ordered a pizza and delivered the crust. Technically food. Where are the toppings?

🎯 **Critical Issues:**
• Your summary reads like a horoscope. "Detail-oriented professional" applies to everyone and proves nothing. 📊
• Unexplained gaps. Time travel? Witness protection? Give us one line. ⏰
• Skills with zero evidence. Claiming you cook while the smoke alarm disagrees. 🔥

🚀 **Emergency Fixes:**
• Quantify everything: "streamlined 5 processes, saving 20 hours a week".
• Let a human show through. You are not a fax machine.
• Active voice: "I led", not "was responsible for possibly leading when asked nicely".

💯 FINAL SCORE: {score}/100

*Demo response. Set GROQ_API_KEY for brutal AI honesty! 🤖*"#,
    r#"🔥 RESUME ROAST INCOMING 🔥

Reviewing "{filename}" felt like watching a cooking show where the contestant forgot to turn on the oven. All ingredients, zero heat. 🍳

📉 **The Format:** Three fonts, two date styles and one very brave use of Comic Sans energy. Pick one style and commit.

🧩 **The Content:** Every job lists duties, none list results. Recruiters skim for impact; right now they find a job description you copied from the posting.

🛠️ **Fix List:**
• Lead with your strongest project, not your oldest job.
• One line per bullet where possible. Nobody reads paragraph four.
• Cut "references available upon request". Everyone knows.

🏁 **Verdict:** Solid bones, bland seasoning. A weekend of edits moves this from "maybe" to "call them".

💯 FINAL SCORE: {score}/100

*Demo response. Set GROQ_API_KEY to unlock the real roast! 🔥*"#,
];
