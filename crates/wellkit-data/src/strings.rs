//! Localized UI strings.
//!
//! `strings_for` is a total, pure lookup from `Language` to a static string
//! table.  Translation quality is best-effort demo copy — there is no
//! pluralization, interpolation, or locale negotiation.

use wellkit_contracts::profile::Language;

/// Every user-visible string the front ends render, for one language.
#[derive(Debug)]
pub struct UiStrings {
    // Welcome
    pub tagline: &'static str,

    // Login / register
    pub login_welcome: &'static str,
    pub login_subtitle: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub login: &'static str,
    pub no_account: &'static str,
    pub sign_up: &'static str,
    pub demo_hint: &'static str,
    pub register_title: &'static str,
    pub full_name: &'static str,
    pub have_account: &'static str,

    // Dashboard
    pub dashboard_welcome: &'static str,
    pub dashboard_subtitle: &'static str,
    pub medicine: &'static str,
    pub medicine_desc: &'static str,
    pub hospitals: &'static str,
    pub hospitals_desc: &'static str,
    pub appointments: &'static str,
    pub appointments_desc: &'static str,
    pub chatbot: &'static str,
    pub chatbot_desc: &'static str,
    pub quick_tip: &'static str,
    pub tip_message: &'static str,

    // Medicine reminders
    pub medicine_subtitle: &'static str,
    pub active_reminders: &'static str,
    pub no_reminders: &'static str,

    // Hospitals
    pub location_prompt: &'static str,
    pub hospitals_list: &'static str,

    // Appointments
    pub appointments_subtitle: &'static str,
    pub your_appointments: &'static str,
    pub no_appointments: &'static str,

    // Chat
    pub chat_subtitle: &'static str,
    pub chat_placeholder: &'static str,
    pub greeting: &'static str,
    pub quick_questions: [&'static str; 4],
    pub food_recommended: &'static str,
    pub typing: &'static str,

    // Settings
    pub settings: &'static str,
    pub language_label: &'static str,
    pub notifications: &'static str,
    pub logout: &'static str,
}

static EN: UiStrings = UiStrings {
    tagline: "Connecting Your Health Needs in One Tap",
    login_welcome: "Welcome Back",
    login_subtitle: "Login to access your health companion",
    email: "Email Address",
    password: "Password",
    login: "Login",
    no_account: "Don't have an account?",
    sign_up: "Sign Up",
    demo_hint: "Demo: Use any email and password",
    register_title: "Create Account",
    full_name: "Full Name",
    have_account: "Already have an account?",
    dashboard_welcome: "Welcome",
    dashboard_subtitle: "How can we help you today?",
    medicine: "Medicine Reminder",
    medicine_desc: "Never miss a dose",
    hospitals: "Nearby Hospitals",
    hospitals_desc: "Find care near you",
    appointments: "Appointments",
    appointments_desc: "Manage your visits",
    chatbot: "Health Advisor",
    chatbot_desc: "Ask health questions",
    quick_tip: "Health Tip of the Day",
    tip_message: "Stay hydrated! Drink at least 8 glasses of water daily.",
    medicine_subtitle: "Never miss your medication",
    active_reminders: "Active Reminders",
    no_reminders: "No reminders yet",
    location_prompt: "Please enable location services to find nearby hospitals",
    hospitals_list: "Available Hospitals",
    appointments_subtitle: "Manage your medical visits",
    your_appointments: "Your Appointments",
    no_appointments: "No appointments scheduled",
    chat_subtitle: "Get personalized health guidance",
    chat_placeholder: "Ask a health question...",
    greeting: "Hello! 👋 I'm your personal health advisor. How can I help you today?",
    quick_questions: ["Check symptoms", "Food advice", "Healthy habits", "Emergency help"],
    food_recommended: "Recommended Foods",
    typing: "Advisor is typing",
    settings: "Settings",
    language_label: "Language",
    notifications: "Notifications",
    logout: "Logout",
};

static ES: UiStrings = UiStrings {
    tagline: "Conectando tus necesidades de salud en un toque",
    login_welcome: "Bienvenido de Nuevo",
    login_subtitle: "Inicia sesión para acceder a tu compañero de salud",
    email: "Correo Electrónico",
    password: "Contraseña",
    login: "Iniciar Sesión",
    no_account: "¿No tienes una cuenta?",
    sign_up: "Registrarse",
    demo_hint: "Demo: Usa cualquier correo y contraseña",
    register_title: "Crear Cuenta",
    full_name: "Nombre Completo",
    have_account: "¿Ya tienes una cuenta?",
    dashboard_welcome: "Bienvenido",
    dashboard_subtitle: "¿Cómo podemos ayudarte hoy?",
    medicine: "Recordatorio de Medicina",
    medicine_desc: "Nunca olvides una dosis",
    hospitals: "Hospitales Cercanos",
    hospitals_desc: "Encuentra atención cerca",
    appointments: "Citas",
    appointments_desc: "Gestiona tus visitas",
    chatbot: "Asesor de Salud",
    chatbot_desc: "Pregunta sobre salud",
    quick_tip: "Consejo de Salud del Día",
    tip_message: "¡Mantente hidratado! Bebe al menos 8 vasos de agua al día.",
    medicine_subtitle: "Nunca olvides tu medicación",
    active_reminders: "Recordatorios Activos",
    no_reminders: "Aún no hay recordatorios",
    location_prompt: "Por favor habilita los servicios de ubicación para encontrar hospitales cercanos",
    hospitals_list: "Hospitales Disponibles",
    appointments_subtitle: "Gestiona tus visitas médicas",
    your_appointments: "Tus Citas",
    no_appointments: "No hay citas programadas",
    chat_subtitle: "Obtén orientación de salud personalizada",
    chat_placeholder: "Haz una pregunta de salud...",
    greeting: "¡Hola! 👋 Soy tu asesor de salud personal. ¿Cómo puedo ayudarte hoy?",
    quick_questions: [
        "Revisar síntomas",
        "Consejo de comida",
        "Hábitos saludables",
        "Ayuda de emergencia",
    ],
    food_recommended: "Alimentos Recomendados",
    typing: "Asesor está escribiendo",
    settings: "Ajustes",
    language_label: "Idioma",
    notifications: "Notificaciones",
    logout: "Cerrar Sesión",
};

static FR: UiStrings = UiStrings {
    tagline: "Vos besoins de santé réunis en un geste",
    login_welcome: "Bon Retour",
    login_subtitle: "Connectez-vous pour accéder à votre compagnon santé",
    email: "Adresse E-mail",
    password: "Mot de Passe",
    login: "Connexion",
    no_account: "Vous n'avez pas de compte?",
    sign_up: "S'inscrire",
    demo_hint: "Démo: Utilisez n'importe quel e-mail et mot de passe",
    register_title: "Créer un Compte",
    full_name: "Nom Complet",
    have_account: "Vous avez déjà un compte?",
    dashboard_welcome: "Bienvenue",
    dashboard_subtitle: "Comment pouvons-nous vous aider aujourd'hui?",
    medicine: "Rappel de Médicament",
    medicine_desc: "Ne manquez jamais une dose",
    hospitals: "Hôpitaux à Proximité",
    hospitals_desc: "Trouvez des soins près de vous",
    appointments: "Rendez-vous",
    appointments_desc: "Gérez vos visites",
    chatbot: "Conseiller Santé",
    chatbot_desc: "Posez des questions santé",
    quick_tip: "Astuce Santé du Jour",
    tip_message: "Restez hydraté! Buvez au moins 8 verres d'eau par jour.",
    medicine_subtitle: "Ne manquez jamais votre médicament",
    active_reminders: "Rappels Actifs",
    no_reminders: "Pas encore de rappels",
    location_prompt: "Veuillez activer la localisation pour trouver les hôpitaux à proximité",
    hospitals_list: "Hôpitaux Disponibles",
    appointments_subtitle: "Gérez vos visites médicales",
    your_appointments: "Vos Rendez-vous",
    no_appointments: "Aucun rendez-vous prévu",
    chat_subtitle: "Obtenez des conseils santé personnalisés",
    chat_placeholder: "Posez une question santé...",
    greeting: "Bonjour! 👋 Je suis votre conseiller santé personnel. Comment puis-je vous aider aujourd'hui?",
    quick_questions: [
        "Vérifier symptômes",
        "Conseil alimentaire",
        "Habitudes saines",
        "Aide d'urgence",
    ],
    food_recommended: "Aliments Recommandés",
    typing: "Conseiller écrit",
    settings: "Paramètres",
    language_label: "Langue",
    notifications: "Notifications",
    logout: "Déconnexion",
};

static HI: UiStrings = UiStrings {
    tagline: "एक टैप में आपकी सभी स्वास्थ्य ज़रूरतें",
    login_welcome: "वापसी पर स्वागत है",
    login_subtitle: "अपने स्वास्थ्य साथी तक पहुंचने के लिए लॉगिन करें",
    email: "ईमेल पता",
    password: "पासवर्ड",
    login: "लॉगिन",
    no_account: "खाता नहीं है?",
    sign_up: "साइन अप करें",
    demo_hint: "डेमो: कोई भी ईमेल और पासवर्ड उपयोग करें",
    register_title: "खाता बनाएं",
    full_name: "पूरा नाम",
    have_account: "पहले से खाता है?",
    dashboard_welcome: "स्वागत है",
    dashboard_subtitle: "आज हम आपकी कैसे मदद कर सकते हैं?",
    medicine: "दवा रिमाइंडर",
    medicine_desc: "कभी खुराक न भूलें",
    hospitals: "नज़दीकी अस्पताल",
    hospitals_desc: "पास में देखभाल खोजें",
    appointments: "अपॉइंटमेंट",
    appointments_desc: "अपनी यात्राओं को प्रबंधित करें",
    chatbot: "स्वास्थ्य सलाहकार",
    chatbot_desc: "स्वास्थ्य प्रश्न पूछें",
    quick_tip: "आज का स्वास्थ्य सुझाव",
    tip_message: "हाइड्रेटेड रहें! रोज़ाना कम से कम 8 गिलास पानी पिएं।",
    medicine_subtitle: "अपनी दवा कभी न भूलें",
    active_reminders: "सक्रिय रिमाइंडर",
    no_reminders: "अभी तक कोई रिमाइंडर नहीं",
    location_prompt: "नज़दीकी अस्पताल खोजने के लिए कृपया लोकेशन सेवाएं चालू करें",
    hospitals_list: "उपलब्ध अस्पताल",
    appointments_subtitle: "अपनी चिकित्सा यात्राएं प्रबंधित करें",
    your_appointments: "आपकी अपॉइंटमेंट",
    no_appointments: "कोई अपॉइंटमेंट निर्धारित नहीं",
    chat_subtitle: "व्यक्तिगत स्वास्थ्य मार्गदर्शन प्राप्त करें",
    chat_placeholder: "स्वास्थ्य प्रश्न पूछें...",
    greeting: "नमस्ते! 👋 मैं आपका व्यक्तिगत स्वास्थ्य सलाहकार हूं। आज मैं आपकी कैसे मदद कर सकता हूं?",
    quick_questions: ["लक्षण जांचें", "भोजन सलाह", "स्वस्थ आदतें", "आपातकालीन मदद"],
    food_recommended: "अनुशंसित खाद्य पदार्थ",
    typing: "सलाहकार लिख रहे हैं",
    settings: "सेटिंग्स",
    language_label: "भाषा",
    notifications: "सूचनाएं",
    logout: "लॉग आउट",
};

/// Look up the string table for a language.  Total over all variants.
pub fn strings_for(language: Language) -> &'static UiStrings {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Fr => &FR,
        Language::Hi => &HI,
    }
}

#[cfg(test)]
mod tests {
    use wellkit_contracts::profile::Language;

    use super::strings_for;

    #[test]
    fn lookup_is_total_and_populated() {
        for language in [Language::En, Language::Es, Language::Fr, Language::Hi] {
            let strings = strings_for(language);
            assert!(!strings.greeting.is_empty());
            assert!(!strings.chat_placeholder.is_empty());
            assert!(!strings.chatbot.is_empty());
            assert_eq!(strings.quick_questions.len(), 4);
            assert!(strings.quick_questions.iter().all(|q| !q.is_empty()));
        }
    }

    #[test]
    fn languages_get_distinct_greetings() {
        let greetings: std::collections::HashSet<&str> =
            [Language::En, Language::Es, Language::Fr, Language::Hi]
                .into_iter()
                .map(|l| strings_for(l).greeting)
                .collect();
        assert_eq!(greetings.len(), 4);
    }
}
