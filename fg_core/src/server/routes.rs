use tracing::info;

pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

/// Prefix every route below is nested under.
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub enum BackendApiChat {
    Chat,
}

impl BackendApiChat {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiChat::Chat => ApiPath::Static("/chat"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiHealth {
    Health,
    TestGemini,
}

impl BackendApiHealth {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiHealth::Health => ApiPath::Static("/health"),
            BackendApiHealth::TestGemini => ApiPath::Static("/test-gemini"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendConversationApi {
    List,
    Active,
    Select,
    Delete,
    SendMessage,
}

impl BackendConversationApi {
    pub fn path(&self, conversation_id: Option<&str>) -> ApiPath {
        let conversation_id = conversation_id.unwrap_or("{conversation_id}");
        match self {
            BackendConversationApi::List => ApiPath::Static("/v1/conversations"),
            BackendConversationApi::Active => ApiPath::Static("/v1/conversations/active"),
            BackendConversationApi::Select => {
                ApiPath::Dynamic(format!("/v1/conversations/{}/select", conversation_id))
            }
            BackendConversationApi::Delete => {
                ApiPath::Dynamic(format!("/v1/conversations/{}", conversation_id))
            }
            BackendConversationApi::SendMessage => ApiPath::Static("/v1/conversations/messages"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiProfile {
    Profile,
    Language,
    Onboarding,
    Stats,
    Export,
    Data,
}

impl BackendApiProfile {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiProfile::Profile => ApiPath::Static("/v1/profile"),
            BackendApiProfile::Language => ApiPath::Static("/v1/profile/language"),
            BackendApiProfile::Onboarding => ApiPath::Static("/v1/profile/onboarding"),
            BackendApiProfile::Stats => ApiPath::Static("/v1/profile/stats"),
            BackendApiProfile::Export => ApiPath::Static("/v1/profile/export"),
            BackendApiProfile::Data => ApiPath::Static("/v1/profile/data"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiLanguage {
    List,
}

impl BackendApiLanguage {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiLanguage::List => ApiPath::Static("/v1/languages"),
        }
    }
}

pub fn print_all_backend_api_paths() {
    for chat in [BackendApiChat::Chat].iter() {
        info!("{API_PREFIX}{}", chat.path().as_str());
    }

    for health in [BackendApiHealth::Health, BackendApiHealth::TestGemini].iter() {
        info!("{API_PREFIX}{}", health.path().as_str());
    }

    for conversation in [
        BackendConversationApi::List,
        BackendConversationApi::Active,
        BackendConversationApi::Select,
        BackendConversationApi::Delete,
        BackendConversationApi::SendMessage,
    ]
    .iter()
    {
        info!("{API_PREFIX}{}", conversation.path(None).as_str());
    }

    for profile in [
        BackendApiProfile::Profile,
        BackendApiProfile::Language,
        BackendApiProfile::Onboarding,
        BackendApiProfile::Stats,
        BackendApiProfile::Export,
        BackendApiProfile::Data,
    ]
    .iter()
    {
        info!("{API_PREFIX}{}", profile.path().as_str());
    }

    info!("{API_PREFIX}{}", BackendApiLanguage::List.path().as_str());
}
