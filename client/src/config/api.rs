//! REST endpoint paths of the learning-assistant backend.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// HTTP verb an endpoint expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Every backend endpoint the shell declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiEndpoint {
    IdentifySkillGap,
    GetSkillGaps,
    UpdateSkillGap,
    CreateLearnerProfile,
    GetLearnerProfile,
    UpdateLearnerProfile,
    CreateLearningPath,
    GetLearningPath,
    UpdateLearningPath,
    CompleteSession,
    UploadDocument,
    GetDocuments,
    GetDocument,
    UpdateDocument,
    DeleteDocument,
    GetAnalytics,
    GetLearningProgress,
    GetSessionHistory,
    SendMessage,
    GetChatHistory,
    ClearChat,
}

impl ApiEndpoint {
    pub const ALL: [ApiEndpoint; 21] = [
        ApiEndpoint::IdentifySkillGap,
        ApiEndpoint::GetSkillGaps,
        ApiEndpoint::UpdateSkillGap,
        ApiEndpoint::CreateLearnerProfile,
        ApiEndpoint::GetLearnerProfile,
        ApiEndpoint::UpdateLearnerProfile,
        ApiEndpoint::CreateLearningPath,
        ApiEndpoint::GetLearningPath,
        ApiEndpoint::UpdateLearningPath,
        ApiEndpoint::CompleteSession,
        ApiEndpoint::UploadDocument,
        ApiEndpoint::GetDocuments,
        ApiEndpoint::GetDocument,
        ApiEndpoint::UpdateDocument,
        ApiEndpoint::DeleteDocument,
        ApiEndpoint::GetAnalytics,
        ApiEndpoint::GetLearningProgress,
        ApiEndpoint::GetSessionHistory,
        ApiEndpoint::SendMessage,
        ApiEndpoint::GetChatHistory,
        ApiEndpoint::ClearChat,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::IdentifySkillGap => "/api/skill-gap/identify",
            Self::GetSkillGaps => "/api/skill-gap/list",
            Self::UpdateSkillGap => "/api/skill-gap/update",
            Self::CreateLearnerProfile => "/api/learner-profile/create",
            Self::GetLearnerProfile => "/api/learner-profile/get",
            Self::UpdateLearnerProfile => "/api/learner-profile/update",
            Self::CreateLearningPath => "/api/learning-path/create",
            Self::GetLearningPath => "/api/learning-path/get",
            Self::UpdateLearningPath => "/api/learning-path/update",
            Self::CompleteSession => "/api/learning-path/session/complete",
            Self::UploadDocument => "/api/document/upload",
            Self::GetDocuments => "/api/document/list",
            Self::GetDocument => "/api/document/get",
            Self::UpdateDocument => "/api/document/update",
            Self::DeleteDocument => "/api/document/delete",
            Self::GetAnalytics => "/api/analytics/dashboard",
            Self::GetLearningProgress => "/api/analytics/progress",
            Self::GetSessionHistory => "/api/analytics/sessions",
            Self::SendMessage => "/api/chat/send",
            Self::GetChatHistory => "/api/chat/history",
            Self::ClearChat => "/api/chat/clear",
        }
    }

    /// Reads use GET, everything that changes backend state uses POST.
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::GetSkillGaps
            | Self::GetLearnerProfile
            | Self::GetLearningPath
            | Self::GetDocuments
            | Self::GetDocument
            | Self::GetAnalytics
            | Self::GetLearningProgress
            | Self::GetSessionHistory
            | Self::GetChatHistory => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }
}
