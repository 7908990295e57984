// Shared prompt constants used on every call.
// Role- and category-specific templates live in advisory/prompts.rs.

/// System prompt sent with every advisor call. The persona itself is part of the
/// user prompt so each stage can speak with its own voice.
pub const ADVISOR_SYSTEM: &str = "\
    당신은 한국 직장인을 돕는 AI 인사(HR) 파트너 팀의 일원입니다. \
    항상 한국어로, 사용자 입장에서 실용적이고 구체적으로 답변하세요. \
    확인되지 않은 사실을 단정하지 말고, 법적 판단이 필요한 부분은 전문가 상담을 권고하세요.";
