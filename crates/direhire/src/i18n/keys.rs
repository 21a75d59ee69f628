/// Every dictionary key the storefront renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    NavHome,
    NavBooth,
    NavSupport,
    NavFindWorkers,
    NavJoinAsWorker,
    NavLogin,
    NavLogout,
    HeroTitle,
    HeroSubtitle,
    HeroServiceType,
    HeroLocation,
    HeroPreferredDate,
    HeroUrgency,
    HeroSearchWorkers,
    HeroPopularServices,
    ServicesCarpenter,
    ServicesPainter,
    ServicesPlumber,
    ServicesElectrician,
    ServicesMason,
    ServicesCleaner,
    ServicesGardener,
    ServicesCook,
    ServicesDriver,
    ServicesTutor,
    WorkersTitle,
    WorkersSortBy,
    WorkersRating,
    WorkersPrice,
    WorkersExperience,
    WorkersViewProfile,
    WorkersHireNow,
    WorkersAvailable,
    WorkersUnavailable,
    WorkersVerified,
    WorkersHourlyRate,
    WorkersProjectRate,
    WorkersCompletedJobs,
    WorkersReviews,
    FiltersTitle,
    FiltersClear,
    FiltersPriceRange,
    FiltersServiceType,
    FiltersExperienceLevel,
    FiltersAvailability,
    FiltersWorkPreference,
    FiltersBeginner,
    FiltersIntermediate,
    FiltersExpert,
    FiltersToday,
    FiltersThisWeek,
    FiltersFlexible,
    FiltersOnsite,
    FiltersRemote,
    FiltersMinimumRating,
    FiltersAndAbove,
    AuthLogin,
    AuthSignup,
    AuthEmail,
    AuthPassword,
    AuthConfirmPassword,
    AuthFullName,
    AuthFirstName,
    AuthLastName,
    AuthPhone,
    AuthLocation,
    AuthPincode,
    AuthAadharNumber,
    AuthLanguagePreference,
    AuthCreateAccount,
    AuthAlreadyHaveAccount,
    AuthDontHaveAccount,
    AuthOtpVerification,
    AuthEnterOtp,
    AuthVerifyOtp,
    AuthResendOtp,
    CommonSave,
    CommonCancel,
    CommonEdit,
    CommonDelete,
    CommonLoading,
    CommonError,
    CommonSuccess,
    CommonYes,
    CommonNo,
    CommonBack,
    CommonNext,
    CommonPrevious,
    CommonSubmit,
    UrgencySameDay,
    UrgencyWithinWeek,
    UrgencyFlexible,
    StatusPending,
    StatusAccepted,
    StatusInProgress,
    StatusCompleted,
    StatusCancelled,
    ProfileTitle,
    ProfileBio,
    ProfileSkills,
    ProfilePortfolio,
    ProfileContactInfo,
    ProfileWorkHistory,
}

impl MessageKey {
    pub const ALL: [MessageKey; 103] = [
        MessageKey::NavHome,
        MessageKey::NavBooth,
        MessageKey::NavSupport,
        MessageKey::NavFindWorkers,
        MessageKey::NavJoinAsWorker,
        MessageKey::NavLogin,
        MessageKey::NavLogout,
        MessageKey::HeroTitle,
        MessageKey::HeroSubtitle,
        MessageKey::HeroServiceType,
        MessageKey::HeroLocation,
        MessageKey::HeroPreferredDate,
        MessageKey::HeroUrgency,
        MessageKey::HeroSearchWorkers,
        MessageKey::HeroPopularServices,
        MessageKey::ServicesCarpenter,
        MessageKey::ServicesPainter,
        MessageKey::ServicesPlumber,
        MessageKey::ServicesElectrician,
        MessageKey::ServicesMason,
        MessageKey::ServicesCleaner,
        MessageKey::ServicesGardener,
        MessageKey::ServicesCook,
        MessageKey::ServicesDriver,
        MessageKey::ServicesTutor,
        MessageKey::WorkersTitle,
        MessageKey::WorkersSortBy,
        MessageKey::WorkersRating,
        MessageKey::WorkersPrice,
        MessageKey::WorkersExperience,
        MessageKey::WorkersViewProfile,
        MessageKey::WorkersHireNow,
        MessageKey::WorkersAvailable,
        MessageKey::WorkersUnavailable,
        MessageKey::WorkersVerified,
        MessageKey::WorkersHourlyRate,
        MessageKey::WorkersProjectRate,
        MessageKey::WorkersCompletedJobs,
        MessageKey::WorkersReviews,
        MessageKey::FiltersTitle,
        MessageKey::FiltersClear,
        MessageKey::FiltersPriceRange,
        MessageKey::FiltersServiceType,
        MessageKey::FiltersExperienceLevel,
        MessageKey::FiltersAvailability,
        MessageKey::FiltersWorkPreference,
        MessageKey::FiltersBeginner,
        MessageKey::FiltersIntermediate,
        MessageKey::FiltersExpert,
        MessageKey::FiltersToday,
        MessageKey::FiltersThisWeek,
        MessageKey::FiltersFlexible,
        MessageKey::FiltersOnsite,
        MessageKey::FiltersRemote,
        MessageKey::FiltersMinimumRating,
        MessageKey::FiltersAndAbove,
        MessageKey::AuthLogin,
        MessageKey::AuthSignup,
        MessageKey::AuthEmail,
        MessageKey::AuthPassword,
        MessageKey::AuthConfirmPassword,
        MessageKey::AuthFullName,
        MessageKey::AuthFirstName,
        MessageKey::AuthLastName,
        MessageKey::AuthPhone,
        MessageKey::AuthLocation,
        MessageKey::AuthPincode,
        MessageKey::AuthAadharNumber,
        MessageKey::AuthLanguagePreference,
        MessageKey::AuthCreateAccount,
        MessageKey::AuthAlreadyHaveAccount,
        MessageKey::AuthDontHaveAccount,
        MessageKey::AuthOtpVerification,
        MessageKey::AuthEnterOtp,
        MessageKey::AuthVerifyOtp,
        MessageKey::AuthResendOtp,
        MessageKey::CommonSave,
        MessageKey::CommonCancel,
        MessageKey::CommonEdit,
        MessageKey::CommonDelete,
        MessageKey::CommonLoading,
        MessageKey::CommonError,
        MessageKey::CommonSuccess,
        MessageKey::CommonYes,
        MessageKey::CommonNo,
        MessageKey::CommonBack,
        MessageKey::CommonNext,
        MessageKey::CommonPrevious,
        MessageKey::CommonSubmit,
        MessageKey::UrgencySameDay,
        MessageKey::UrgencyWithinWeek,
        MessageKey::UrgencyFlexible,
        MessageKey::StatusPending,
        MessageKey::StatusAccepted,
        MessageKey::StatusInProgress,
        MessageKey::StatusCompleted,
        MessageKey::StatusCancelled,
        MessageKey::ProfileTitle,
        MessageKey::ProfileBio,
        MessageKey::ProfileSkills,
        MessageKey::ProfilePortfolio,
        MessageKey::ProfileContactInfo,
        MessageKey::ProfileWorkHistory,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::NavHome => "nav.home",
            MessageKey::NavBooth => "nav.booth",
            MessageKey::NavSupport => "nav.support",
            MessageKey::NavFindWorkers => "nav.findWorkers",
            MessageKey::NavJoinAsWorker => "nav.joinAsWorker",
            MessageKey::NavLogin => "nav.login",
            MessageKey::NavLogout => "nav.logout",
            MessageKey::HeroTitle => "hero.title",
            MessageKey::HeroSubtitle => "hero.subtitle",
            MessageKey::HeroServiceType => "hero.serviceType",
            MessageKey::HeroLocation => "hero.location",
            MessageKey::HeroPreferredDate => "hero.preferredDate",
            MessageKey::HeroUrgency => "hero.urgency",
            MessageKey::HeroSearchWorkers => "hero.searchWorkers",
            MessageKey::HeroPopularServices => "hero.popularServices",
            MessageKey::ServicesCarpenter => "services.carpenter",
            MessageKey::ServicesPainter => "services.painter",
            MessageKey::ServicesPlumber => "services.plumber",
            MessageKey::ServicesElectrician => "services.electrician",
            MessageKey::ServicesMason => "services.mason",
            MessageKey::ServicesCleaner => "services.cleaner",
            MessageKey::ServicesGardener => "services.gardener",
            MessageKey::ServicesCook => "services.cook",
            MessageKey::ServicesDriver => "services.driver",
            MessageKey::ServicesTutor => "services.tutor",
            MessageKey::WorkersTitle => "workers.title",
            MessageKey::WorkersSortBy => "workers.sortBy",
            MessageKey::WorkersRating => "workers.rating",
            MessageKey::WorkersPrice => "workers.price",
            MessageKey::WorkersExperience => "workers.experience",
            MessageKey::WorkersViewProfile => "workers.viewProfile",
            MessageKey::WorkersHireNow => "workers.hireNow",
            MessageKey::WorkersAvailable => "workers.available",
            MessageKey::WorkersUnavailable => "workers.unavailable",
            MessageKey::WorkersVerified => "workers.verified",
            MessageKey::WorkersHourlyRate => "workers.hourlyRate",
            MessageKey::WorkersProjectRate => "workers.projectRate",
            MessageKey::WorkersCompletedJobs => "workers.completedJobs",
            MessageKey::WorkersReviews => "workers.reviews",
            MessageKey::FiltersTitle => "filters.title",
            MessageKey::FiltersClear => "filters.clear",
            MessageKey::FiltersPriceRange => "filters.priceRange",
            MessageKey::FiltersServiceType => "filters.serviceType",
            MessageKey::FiltersExperienceLevel => "filters.experienceLevel",
            MessageKey::FiltersAvailability => "filters.availability",
            MessageKey::FiltersWorkPreference => "filters.workPreference",
            MessageKey::FiltersBeginner => "filters.beginner",
            MessageKey::FiltersIntermediate => "filters.intermediate",
            MessageKey::FiltersExpert => "filters.expert",
            MessageKey::FiltersToday => "filters.today",
            MessageKey::FiltersThisWeek => "filters.thisWeek",
            MessageKey::FiltersFlexible => "filters.flexible",
            MessageKey::FiltersOnsite => "filters.onsite",
            MessageKey::FiltersRemote => "filters.remote",
            MessageKey::FiltersMinimumRating => "filters.minimumRating",
            MessageKey::FiltersAndAbove => "filters.andAbove",
            MessageKey::AuthLogin => "auth.login",
            MessageKey::AuthSignup => "auth.signup",
            MessageKey::AuthEmail => "auth.email",
            MessageKey::AuthPassword => "auth.password",
            MessageKey::AuthConfirmPassword => "auth.confirmPassword",
            MessageKey::AuthFullName => "auth.fullName",
            MessageKey::AuthFirstName => "auth.firstName",
            MessageKey::AuthLastName => "auth.lastName",
            MessageKey::AuthPhone => "auth.phone",
            MessageKey::AuthLocation => "auth.location",
            MessageKey::AuthPincode => "auth.pincode",
            MessageKey::AuthAadharNumber => "auth.aadharNumber",
            MessageKey::AuthLanguagePreference => "auth.languagePreference",
            MessageKey::AuthCreateAccount => "auth.createAccount",
            MessageKey::AuthAlreadyHaveAccount => "auth.alreadyHaveAccount",
            MessageKey::AuthDontHaveAccount => "auth.dontHaveAccount",
            MessageKey::AuthOtpVerification => "auth.otpVerification",
            MessageKey::AuthEnterOtp => "auth.enterOtp",
            MessageKey::AuthVerifyOtp => "auth.verifyOtp",
            MessageKey::AuthResendOtp => "auth.resendOtp",
            MessageKey::CommonSave => "common.save",
            MessageKey::CommonCancel => "common.cancel",
            MessageKey::CommonEdit => "common.edit",
            MessageKey::CommonDelete => "common.delete",
            MessageKey::CommonLoading => "common.loading",
            MessageKey::CommonError => "common.error",
            MessageKey::CommonSuccess => "common.success",
            MessageKey::CommonYes => "common.yes",
            MessageKey::CommonNo => "common.no",
            MessageKey::CommonBack => "common.back",
            MessageKey::CommonNext => "common.next",
            MessageKey::CommonPrevious => "common.previous",
            MessageKey::CommonSubmit => "common.submit",
            MessageKey::UrgencySameDay => "urgency.sameDay",
            MessageKey::UrgencyWithinWeek => "urgency.withinWeek",
            MessageKey::UrgencyFlexible => "urgency.flexible",
            MessageKey::StatusPending => "status.pending",
            MessageKey::StatusAccepted => "status.accepted",
            MessageKey::StatusInProgress => "status.inProgress",
            MessageKey::StatusCompleted => "status.completed",
            MessageKey::StatusCancelled => "status.cancelled",
            MessageKey::ProfileTitle => "profile.title",
            MessageKey::ProfileBio => "profile.bio",
            MessageKey::ProfileSkills => "profile.skills",
            MessageKey::ProfilePortfolio => "profile.portfolio",
            MessageKey::ProfileContactInfo => "profile.contactInfo",
            MessageKey::ProfileWorkHistory => "profile.workHistory",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "nav.home" => Some(MessageKey::NavHome),
            "nav.booth" => Some(MessageKey::NavBooth),
            "nav.support" => Some(MessageKey::NavSupport),
            "nav.findWorkers" => Some(MessageKey::NavFindWorkers),
            "nav.joinAsWorker" => Some(MessageKey::NavJoinAsWorker),
            "nav.login" => Some(MessageKey::NavLogin),
            "nav.logout" => Some(MessageKey::NavLogout),
            "hero.title" => Some(MessageKey::HeroTitle),
            "hero.subtitle" => Some(MessageKey::HeroSubtitle),
            "hero.serviceType" => Some(MessageKey::HeroServiceType),
            "hero.location" => Some(MessageKey::HeroLocation),
            "hero.preferredDate" => Some(MessageKey::HeroPreferredDate),
            "hero.urgency" => Some(MessageKey::HeroUrgency),
            "hero.searchWorkers" => Some(MessageKey::HeroSearchWorkers),
            "hero.popularServices" => Some(MessageKey::HeroPopularServices),
            "services.carpenter" => Some(MessageKey::ServicesCarpenter),
            "services.painter" => Some(MessageKey::ServicesPainter),
            "services.plumber" => Some(MessageKey::ServicesPlumber),
            "services.electrician" => Some(MessageKey::ServicesElectrician),
            "services.mason" => Some(MessageKey::ServicesMason),
            "services.cleaner" => Some(MessageKey::ServicesCleaner),
            "services.gardener" => Some(MessageKey::ServicesGardener),
            "services.cook" => Some(MessageKey::ServicesCook),
            "services.driver" => Some(MessageKey::ServicesDriver),
            "services.tutor" => Some(MessageKey::ServicesTutor),
            "workers.title" => Some(MessageKey::WorkersTitle),
            "workers.sortBy" => Some(MessageKey::WorkersSortBy),
            "workers.rating" => Some(MessageKey::WorkersRating),
            "workers.price" => Some(MessageKey::WorkersPrice),
            "workers.experience" => Some(MessageKey::WorkersExperience),
            "workers.viewProfile" => Some(MessageKey::WorkersViewProfile),
            "workers.hireNow" => Some(MessageKey::WorkersHireNow),
            "workers.available" => Some(MessageKey::WorkersAvailable),
            "workers.unavailable" => Some(MessageKey::WorkersUnavailable),
            "workers.verified" => Some(MessageKey::WorkersVerified),
            "workers.hourlyRate" => Some(MessageKey::WorkersHourlyRate),
            "workers.projectRate" => Some(MessageKey::WorkersProjectRate),
            "workers.completedJobs" => Some(MessageKey::WorkersCompletedJobs),
            "workers.reviews" => Some(MessageKey::WorkersReviews),
            "filters.title" => Some(MessageKey::FiltersTitle),
            "filters.clear" => Some(MessageKey::FiltersClear),
            "filters.priceRange" => Some(MessageKey::FiltersPriceRange),
            "filters.serviceType" => Some(MessageKey::FiltersServiceType),
            "filters.experienceLevel" => Some(MessageKey::FiltersExperienceLevel),
            "filters.availability" => Some(MessageKey::FiltersAvailability),
            "filters.workPreference" => Some(MessageKey::FiltersWorkPreference),
            "filters.beginner" => Some(MessageKey::FiltersBeginner),
            "filters.intermediate" => Some(MessageKey::FiltersIntermediate),
            "filters.expert" => Some(MessageKey::FiltersExpert),
            "filters.today" => Some(MessageKey::FiltersToday),
            "filters.thisWeek" => Some(MessageKey::FiltersThisWeek),
            "filters.flexible" => Some(MessageKey::FiltersFlexible),
            "filters.onsite" => Some(MessageKey::FiltersOnsite),
            "filters.remote" => Some(MessageKey::FiltersRemote),
            "filters.minimumRating" => Some(MessageKey::FiltersMinimumRating),
            "filters.andAbove" => Some(MessageKey::FiltersAndAbove),
            "auth.login" => Some(MessageKey::AuthLogin),
            "auth.signup" => Some(MessageKey::AuthSignup),
            "auth.email" => Some(MessageKey::AuthEmail),
            "auth.password" => Some(MessageKey::AuthPassword),
            "auth.confirmPassword" => Some(MessageKey::AuthConfirmPassword),
            "auth.fullName" => Some(MessageKey::AuthFullName),
            "auth.firstName" => Some(MessageKey::AuthFirstName),
            "auth.lastName" => Some(MessageKey::AuthLastName),
            "auth.phone" => Some(MessageKey::AuthPhone),
            "auth.location" => Some(MessageKey::AuthLocation),
            "auth.pincode" => Some(MessageKey::AuthPincode),
            "auth.aadharNumber" => Some(MessageKey::AuthAadharNumber),
            "auth.languagePreference" => Some(MessageKey::AuthLanguagePreference),
            "auth.createAccount" => Some(MessageKey::AuthCreateAccount),
            "auth.alreadyHaveAccount" => Some(MessageKey::AuthAlreadyHaveAccount),
            "auth.dontHaveAccount" => Some(MessageKey::AuthDontHaveAccount),
            "auth.otpVerification" => Some(MessageKey::AuthOtpVerification),
            "auth.enterOtp" => Some(MessageKey::AuthEnterOtp),
            "auth.verifyOtp" => Some(MessageKey::AuthVerifyOtp),
            "auth.resendOtp" => Some(MessageKey::AuthResendOtp),
            "common.save" => Some(MessageKey::CommonSave),
            "common.cancel" => Some(MessageKey::CommonCancel),
            "common.edit" => Some(MessageKey::CommonEdit),
            "common.delete" => Some(MessageKey::CommonDelete),
            "common.loading" => Some(MessageKey::CommonLoading),
            "common.error" => Some(MessageKey::CommonError),
            "common.success" => Some(MessageKey::CommonSuccess),
            "common.yes" => Some(MessageKey::CommonYes),
            "common.no" => Some(MessageKey::CommonNo),
            "common.back" => Some(MessageKey::CommonBack),
            "common.next" => Some(MessageKey::CommonNext),
            "common.previous" => Some(MessageKey::CommonPrevious),
            "common.submit" => Some(MessageKey::CommonSubmit),
            "urgency.sameDay" => Some(MessageKey::UrgencySameDay),
            "urgency.withinWeek" => Some(MessageKey::UrgencyWithinWeek),
            "urgency.flexible" => Some(MessageKey::UrgencyFlexible),
            "status.pending" => Some(MessageKey::StatusPending),
            "status.accepted" => Some(MessageKey::StatusAccepted),
            "status.inProgress" => Some(MessageKey::StatusInProgress),
            "status.completed" => Some(MessageKey::StatusCompleted),
            "status.cancelled" => Some(MessageKey::StatusCancelled),
            "profile.title" => Some(MessageKey::ProfileTitle),
            "profile.bio" => Some(MessageKey::ProfileBio),
            "profile.skills" => Some(MessageKey::ProfileSkills),
            "profile.portfolio" => Some(MessageKey::ProfilePortfolio),
            "profile.contactInfo" => Some(MessageKey::ProfileContactInfo),
            "profile.workHistory" => Some(MessageKey::ProfileWorkHistory),
            _ => None,
        }
    }
}
