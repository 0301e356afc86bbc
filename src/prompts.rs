//! Prompt builders for the remote models.
//!
//! Pure functions from structured domain values to prompt text. No I/O,
//! no failure modes. The instruction templates are Chinese-language and
//! fixed; only the embedded name or imagery strings vary.

/// System persona for the name-interpretation exchange.
pub const INTERPRETER_PERSONA: &str = "你是一个根据用户名称拆解为意象组合的助手。";

/// System persona for the feedback exchange.
pub const FEEDBACK_PERSONA: &str =
    "你是一位精通命理、文化、风水和积极心理学的专家，能够根据用户选择的意象组合生成充满情绪价值的赞美和反馈。";

/// Build the instruction that turns a name into exactly three imagery
/// combinations.
///
/// The template pins the output shape (a JSON array of three
/// `{id, imagery1, imagery2}` objects), states the creative constraints
/// (phonetic association, concreteness, at least one personifiable element,
/// no abstract concepts) and anchors the format with a worked example.
pub fn interpretation_prompt(name: &str) -> String {
    format!(
        r#"
任务：根据中文名/昵称"{name}"通过谐音拆解为可实体化的意象组合。

输出格式：
[
  {{
    "id": 1,
    "imagery1": "具象实体A",
    "imagery2": "具象实体B"
  }},
  {{
    "id": 2,
    "imagery1": "具象实体C",
    "imagery2": "具象实体D"
  }},
  {{
    "id": 3,
    "imagery1": "具象实体E",
    "imagery2": "具象实体F"
  }}
]

要求：
1. 必须满足谐音关联（如"孙"→"孙悟空猴子", "孙"→"笋"）
2. 每组组合需包含至少1个可拟人化元素（动物/人物/拟物形态）
3. 排除抽象概念（如宇宙、晨曦等不可实体化元素）
4. 所有元素应具有较强的实体感和落地性，避免过度联想或过于艺术化的表达
5. 输出数量为 3组，不缺不超

示例输入：孙小鱼
示例输出：
[
  {{
    "id": 1,
    "imagery1": "孙悟空的小猴",
    "imagery2": "流线型的鱼尾"
  }},
  {{
    "id": 2,
    "imagery1": "鲜嫩竹笋",
    "imagery2": "红色锦鲤"
  }},
  {{
    "id": 3,
    "imagery1": "孙大圣的猴",
    "imagery2": "灵动的小鱼尾"
  }}
]
"#
    )
}

/// Build the stylistic prompt for rendering one imagery pair as a
/// blind-box toy image.
pub fn image_prompt(imagery1: &str, imagery2: &str) -> String {
    format!(
        r#"
画一个融合了 '{imagery1}' 和 '{imagery2}' 特征的全新幻想生物。
以**真实感的盲盒玩具**风格呈现，参考**可爱泡泡玛特（Pop Mart）**系列的设计美学。
强调**精细的材质纹理**和**柔和的阴影处理**，使其具有强烈的**3D立体质感**。
背景应为**纯色**，简洁突出主体。
"#
    )
}

/// Build the instruction for the celebratory feedback blurb.
///
/// The five-aspect structure and the ~50-character cap live only in this
/// instruction text; the reply is returned to callers unvalidated.
pub fn feedback_prompt(imagery1: &str, imagery2: &str) -> String {
    format!(
        r#"
任务：你是一位精通命理、文化、风水和积极心理学的专家。你的任务是根据这对专属意象 '{imagery1}' 和 '{imagery2}'，生成一段**超有能量、充满好运**的赞美和反馈！

请用积极向上、生动有趣的语言，直接告诉用户这份组合有多棒，能给他们带来什么好运和独特魅力。内容需要包含：

1.  **核心寓意**：这对意象组合在一起有什么特别的意义？能激发出什么样的强大能量？
2.  **专属运气**：你的盲盒运气值是 **[0-100分，请给出具体数字和简短理由]**！它会如何点亮你的生活？（用营销手段，不要一上来就高分！）
3.  **磁场影响**：这个组合会如何为你带来好风水、正能量，吸引更多好运降临？
4.  **个人启示**：它如何与你的独特个性或未来发展产生奇妙共鸣？
5.  **文化加持**：用一两句经典的文化意象或故事，让这份好运更有底蕴！

让用户看完立刻感受到满满的能量、幸运和被肯定！限制在50字以内，精准切中情绪痛点，表达要口语化，可爱化。
"#
    )
}
