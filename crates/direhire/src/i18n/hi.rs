use super::keys::MessageKey;

pub(super) fn lookup(key: MessageKey) -> &'static str {
    match key {
        MessageKey::NavHome => "मुख्य पृष्ठ",
        MessageKey::NavBooth => "बूथ",
        MessageKey::NavSupport => "सहायता",
        MessageKey::NavFindWorkers => "श्रमिक खोजें",
        MessageKey::NavJoinAsWorker => "श्रमिक के रूप में जुड़ें",
        MessageKey::NavLogin => "लॉगिन",
        MessageKey::NavLogout => "लॉगआउट",
        MessageKey::HeroTitle => "विश्वसनीय स्थानीय श्रमिक खोजें",
        MessageKey::HeroSubtitle => "घर की मरम्मत से लेकर निर्माण तक - सभी सेवाओं के लिए कुशल पेशेवर",
        MessageKey::HeroServiceType => "सेवा का प्रकार",
        MessageKey::HeroLocation => "स्थान",
        MessageKey::HeroPreferredDate => "पसंदीदा दिनांक",
        MessageKey::HeroUrgency => "तत्काल आवश्यकता",
        MessageKey::HeroSearchWorkers => "श्रमिक खोजें",
        MessageKey::HeroPopularServices => "लोकप्रिय सेवाएं",
        MessageKey::ServicesCarpenter => "बढ़ई",
        MessageKey::ServicesPainter => "रंगसाज",
        MessageKey::ServicesPlumber => "नलसाज",
        MessageKey::ServicesElectrician => "बिजली मिस्त्री",
        MessageKey::ServicesMason => "राजमिस्त्री",
        MessageKey::ServicesCleaner => "सफाई कर्मी",
        MessageKey::ServicesGardener => "माली",
        MessageKey::ServicesCook => "रसोइया",
        MessageKey::ServicesDriver => "ड्राइवर",
        MessageKey::ServicesTutor => "शिक्षक",
        MessageKey::WorkersTitle => "उपलब्ध श्रमिक",
        MessageKey::WorkersSortBy => "क्रम में लगाएं",
        MessageKey::WorkersRating => "रेटिंग",
        MessageKey::WorkersPrice => "मूल्य",
        MessageKey::WorkersExperience => "अनुभव",
        MessageKey::WorkersViewProfile => "प्रोफाइल देखें",
        MessageKey::WorkersHireNow => "अभी किराए पर लें",
        MessageKey::WorkersAvailable => "उपलब्ध",
        MessageKey::WorkersUnavailable => "अनुपलब्ध",
        MessageKey::WorkersVerified => "सत्यापित",
        MessageKey::WorkersHourlyRate => "प्रति घंटा दर",
        MessageKey::WorkersProjectRate => "प्रोजेक्ट दर",
        MessageKey::WorkersCompletedJobs => "पूर्ण कार्य",
        MessageKey::WorkersReviews => "समीक्षाएं",
        MessageKey::FiltersTitle => "फ़िल्टर",
        MessageKey::FiltersClear => "साफ़ करें",
        MessageKey::FiltersPriceRange => "मूल्य सीमा",
        MessageKey::FiltersServiceType => "सेवा का प्रकार",
        MessageKey::FiltersExperienceLevel => "अनुभव स्तर",
        MessageKey::FiltersAvailability => "उपलब्धता",
        MessageKey::FiltersWorkPreference => "कार्य वरीयता",
        MessageKey::FiltersBeginner => "नौसिखिया",
        MessageKey::FiltersIntermediate => "मध्यम",
        MessageKey::FiltersExpert => "विशेषज्ञ",
        MessageKey::FiltersToday => "आज",
        MessageKey::FiltersThisWeek => "इस सप्ताह",
        MessageKey::FiltersFlexible => "लचीला",
        MessageKey::FiltersOnsite => "घर पर",
        MessageKey::FiltersRemote => "दूर से",
        MessageKey::FiltersMinimumRating => "न्यूनतम रेटिंग",
        MessageKey::FiltersAndAbove => "और ऊपर",
        MessageKey::AuthLogin => "लॉगिन",
        MessageKey::AuthSignup => "साइन अप",
        MessageKey::AuthEmail => "ईमेल",
        MessageKey::AuthPassword => "पासवर्ड",
        MessageKey::AuthConfirmPassword => "पासवर्ड की पुष्टि करें",
        MessageKey::AuthFullName => "पूरा नाम",
        MessageKey::AuthFirstName => "पहला नाम",
        MessageKey::AuthLastName => "अंतिम नाम",
        MessageKey::AuthPhone => "फोन नंबर",
        MessageKey::AuthLocation => "स्थान",
        MessageKey::AuthPincode => "पिन कोड",
        MessageKey::AuthAadharNumber => "आधार नंबर",
        MessageKey::AuthLanguagePreference => "भाषा वरीयता",
        MessageKey::AuthCreateAccount => "खाता बनाएं",
        MessageKey::AuthAlreadyHaveAccount => "पहले से खाता है?",
        MessageKey::AuthDontHaveAccount => "खाता नहीं है?",
        MessageKey::AuthOtpVerification => "OTP सत्यापन",
        MessageKey::AuthEnterOtp => "OTP दर्ज करें",
        MessageKey::AuthVerifyOtp => "OTP सत्यापित करें",
        MessageKey::AuthResendOtp => "OTP दोबारा भेजें",
        MessageKey::CommonSave => "सहेजें",
        MessageKey::CommonCancel => "रद्द करें",
        MessageKey::CommonEdit => "संपादित करें",
        MessageKey::CommonDelete => "हटाएं",
        MessageKey::CommonLoading => "लोड हो रहा है...",
        MessageKey::CommonError => "त्रुटि",
        MessageKey::CommonSuccess => "सफलता",
        MessageKey::CommonYes => "हां",
        MessageKey::CommonNo => "नहीं",
        MessageKey::CommonBack => "वापस",
        MessageKey::CommonNext => "आगे",
        MessageKey::CommonPrevious => "पिछला",
        MessageKey::CommonSubmit => "प्रस्तुत करें",
        MessageKey::UrgencySameDay => "आज ही",
        MessageKey::UrgencyWithinWeek => "इस सप्ताह के भीतर",
        MessageKey::UrgencyFlexible => "लचीला",
        MessageKey::StatusPending => "लंबित",
        MessageKey::StatusAccepted => "स्वीकृत",
        MessageKey::StatusInProgress => "प्रगति में",
        MessageKey::StatusCompleted => "पूर्ण",
        MessageKey::StatusCancelled => "रद्द",
        MessageKey::ProfileTitle => "प्रोफाइल",
        MessageKey::ProfileBio => "जीवनी",
        MessageKey::ProfileSkills => "कौशल",
        MessageKey::ProfilePortfolio => "पोर्टफोलियो",
        MessageKey::ProfileContactInfo => "संपर्क जानकारी",
        MessageKey::ProfileWorkHistory => "कार्य इतिहास",
    }
}
