use super::keys::MessageKey;

pub(super) fn lookup(key: MessageKey) -> &'static str {
    match key {
        MessageKey::NavHome => "Home",
        MessageKey::NavBooth => "Booth",
        MessageKey::NavSupport => "Support",
        MessageKey::NavFindWorkers => "Find Workers",
        MessageKey::NavJoinAsWorker => "Join as Worker",
        MessageKey::NavLogin => "Login",
        MessageKey::NavLogout => "Logout",
        MessageKey::HeroTitle => "Find Trusted Local Workers",
        MessageKey::HeroSubtitle => "From home repairs to construction - skilled professionals for all your needs",
        MessageKey::HeroServiceType => "Service Type",
        MessageKey::HeroLocation => "Location",
        MessageKey::HeroPreferredDate => "Preferred Date",
        MessageKey::HeroUrgency => "Urgency",
        MessageKey::HeroSearchWorkers => "Search Workers",
        MessageKey::HeroPopularServices => "Popular Services",
        MessageKey::ServicesCarpenter => "Carpenter",
        MessageKey::ServicesPainter => "Painter",
        MessageKey::ServicesPlumber => "Plumber",
        MessageKey::ServicesElectrician => "Electrician",
        MessageKey::ServicesMason => "Mason",
        MessageKey::ServicesCleaner => "Cleaner",
        MessageKey::ServicesGardener => "Gardener",
        MessageKey::ServicesCook => "Cook",
        MessageKey::ServicesDriver => "Driver",
        MessageKey::ServicesTutor => "Tutor",
        MessageKey::WorkersTitle => "Available Workers",
        MessageKey::WorkersSortBy => "Sort by",
        MessageKey::WorkersRating => "Rating",
        MessageKey::WorkersPrice => "Price",
        MessageKey::WorkersExperience => "Experience",
        MessageKey::WorkersViewProfile => "View Profile",
        MessageKey::WorkersHireNow => "Hire Now",
        MessageKey::WorkersAvailable => "Available",
        MessageKey::WorkersUnavailable => "Unavailable",
        MessageKey::WorkersVerified => "Verified",
        MessageKey::WorkersHourlyRate => "Hourly Rate",
        MessageKey::WorkersProjectRate => "Project Rate",
        MessageKey::WorkersCompletedJobs => "Completed Jobs",
        MessageKey::WorkersReviews => "Reviews",
        MessageKey::FiltersTitle => "Filters",
        MessageKey::FiltersClear => "Clear",
        MessageKey::FiltersPriceRange => "Price Range",
        MessageKey::FiltersServiceType => "Service Type",
        MessageKey::FiltersExperienceLevel => "Experience Level",
        MessageKey::FiltersAvailability => "Availability",
        MessageKey::FiltersWorkPreference => "Work Preference",
        MessageKey::FiltersBeginner => "Beginner",
        MessageKey::FiltersIntermediate => "Intermediate",
        MessageKey::FiltersExpert => "Expert",
        MessageKey::FiltersToday => "Today",
        MessageKey::FiltersThisWeek => "This Week",
        MessageKey::FiltersFlexible => "Flexible",
        MessageKey::FiltersOnsite => "On-site",
        MessageKey::FiltersRemote => "Remote",
        MessageKey::FiltersMinimumRating => "Minimum Rating",
        MessageKey::FiltersAndAbove => "& above",
        MessageKey::AuthLogin => "Login",
        MessageKey::AuthSignup => "Sign Up",
        MessageKey::AuthEmail => "Email",
        MessageKey::AuthPassword => "Password",
        MessageKey::AuthConfirmPassword => "Confirm Password",
        MessageKey::AuthFullName => "Full Name",
        MessageKey::AuthFirstName => "First Name",
        MessageKey::AuthLastName => "Last Name",
        MessageKey::AuthPhone => "Phone Number",
        MessageKey::AuthLocation => "Location",
        MessageKey::AuthPincode => "Pin Code",
        MessageKey::AuthAadharNumber => "Aadhar Number",
        MessageKey::AuthLanguagePreference => "Language Preference",
        MessageKey::AuthCreateAccount => "Create Account",
        MessageKey::AuthAlreadyHaveAccount => "Already have an account?",
        MessageKey::AuthDontHaveAccount => "Don't have an account?",
        MessageKey::AuthOtpVerification => "OTP Verification",
        MessageKey::AuthEnterOtp => "Enter OTP",
        MessageKey::AuthVerifyOtp => "Verify OTP",
        MessageKey::AuthResendOtp => "Resend OTP",
        MessageKey::CommonSave => "Save",
        MessageKey::CommonCancel => "Cancel",
        MessageKey::CommonEdit => "Edit",
        MessageKey::CommonDelete => "Delete",
        MessageKey::CommonLoading => "Loading...",
        MessageKey::CommonError => "Error",
        MessageKey::CommonSuccess => "Success",
        MessageKey::CommonYes => "Yes",
        MessageKey::CommonNo => "No",
        MessageKey::CommonBack => "Back",
        MessageKey::CommonNext => "Next",
        MessageKey::CommonPrevious => "Previous",
        MessageKey::CommonSubmit => "Submit",
        MessageKey::UrgencySameDay => "Same Day",
        MessageKey::UrgencyWithinWeek => "Within Week",
        MessageKey::UrgencyFlexible => "Flexible",
        MessageKey::StatusPending => "Pending",
        MessageKey::StatusAccepted => "Accepted",
        MessageKey::StatusInProgress => "In Progress",
        MessageKey::StatusCompleted => "Completed",
        MessageKey::StatusCancelled => "Cancelled",
        MessageKey::ProfileTitle => "Profile",
        MessageKey::ProfileBio => "Bio",
        MessageKey::ProfileSkills => "Skills",
        MessageKey::ProfilePortfolio => "Portfolio",
        MessageKey::ProfileContactInfo => "Contact Information",
        MessageKey::ProfileWorkHistory => "Work History",
    }
}
