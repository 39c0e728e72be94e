//! The Arabic strings shown on the page, gathered in one place so the
//! components stay readable.

// Navigation
pub const NAV_OPEN_LABEL: &str = "فتح القائمة";
pub const NAV_CLOSE_LABEL: &str = "إغلاق القائمة";

// Page chrome
pub const BRAND: &str = "مؤسسة الأمانة للصرافة";
pub const HERO_TITLE: &str = "صرافة موثوقة بأسعار اليوم";
pub const HERO_LEAD: &str = "تابع أسعار الصرف المحدثة واحسب قيمة التحويل قبل زيارة الفرع.";
pub const FOOTER: &str = "© مؤسسة الأمانة للصرافة — جميع الحقوق محفوظة.";

// Section headings
pub const RATES_HEADING: &str = "أسعار الصرف اليوم";
pub const SERVICES_HEADING: &str = "خدماتنا";
pub const SERVICES_LEAD: &str = "صرف العملات، التحويلات الداخلية، وخدمة كبار العملاء.";
pub const CONTACT_HEADING: &str = "تواصل معنا";
pub const CONTACT_LEAD: &str = "يسعدنا استقبالكم في الفرع الرئيسي طوال أيام الأسبوع.";

// Calculator card
pub const CALC_HEADING: &str = "حاسبة التحويل";
pub const CURRENCY_LABEL: &str = "العملة";
pub const AMOUNT_LABEL: &str = "المبلغ";
pub const CALC_BUTTON: &str = "احسب";
pub const RESET_BUTTON: &str = "إعادة تعيين";
pub const RATE_LABEL_PREFIX: &str = "نوع السعر:";

// Rate panel
pub const PANEL_BUY: &str = "شراء";
pub const PANEL_SELL: &str = "بيع";
pub const PANEL_CODE: &str = "العملة";

// Helper messages under the amount field
pub const HELPER_INITIAL: &str = "الرجاء إدخال مبلغ موجب (بدون إشارة سالبة) لعرض الناتج.";
pub const HELPER_EMPTY: &str = "الرجاء إدخال مبلغ موجب (بدون ترك الحقل فارغًا).";
pub const HELPER_NOT_POSITIVE: &str = "الرجاء إدخال مبلغ موجب أكبر من 0.";
pub const HELPER_READY: &str = "جاهز للحساب. يمكنك تعديل العملة أو نوع السعر حسب الحاجة.";
