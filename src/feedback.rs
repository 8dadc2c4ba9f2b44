//! Feedback tables: per-answer feedback, score bands and the final
//! assessment narrative, in English and Hindi.
//!
//! The Hindi tables are indexed exactly like the English ones. The Hindi
//! final assessment is looked up from the English narrative, so every
//! narrative produced by [`get_final_assessment`] must have a Hindi entry.

use crate::errors::AppError;
use crate::models::{Language, Trait};

// ============ Individual Feedback ============

fn english_feedback(r#trait: Trait, score: u8) -> Option<&'static str> {
    use Trait::*;
    let text = match (r#trait, score) {
        (Empathy, 0) => "Try to notice how others feel; a small check-in can mean a lot.",
        (Empathy, 1) => "You care, but you tend to pass the concern on rather than engage.",
        (Empathy, 2) => "You include others warmly and make them feel welcome.",
        (Empathy, 3) => "You listen with genuine care and make people feel understood.",

        (Decisiveness, 0) => "Waiting for others to decide can leave important choices unmade.",
        (Decisiveness, 1) => "You act quickly, but choices need a reason behind them.",
        (Decisiveness, 2) => "You move the group forward with a fair way to decide.",
        (Decisiveness, 3) => "You weigh the options and commit to a clear, reasoned choice.",

        (Resilience, 0) => "Setbacks feel final to you; treat them as lessons instead.",
        (Resilience, 1) => "Disappointment lingers; facing it sooner helps you recover.",
        (Resilience, 2) => "You share the load and keep going, which builds strength.",
        (Resilience, 3) => "You turn setbacks into a plan; that is true resilience.",

        (Courage, 0) => "Going along with wrongdoing is never the safe choice.",
        (Courage, 1) => "You see what is wrong; the next step is to act on it.",
        (Courage, 2) => "You seek help quickly, which protects those in need.",
        (Courage, 3) => "You stand up for others calmly and responsibly.",

        (Integrity, 0) => "Honesty matters most when no one would notice.",
        (Integrity, 1) => "Good intentions count when they are acted on right away.",
        (Integrity, 2) => "You reach the honest choice, even if it takes a moment.",
        (Integrity, 3) => "Your honesty is immediate and unconditional.",

        (Teamwork, 0) => "Complaining divides a team; try a direct conversation instead.",
        (Teamwork, 1) => "Carrying everything yourself hides the problem from the team.",
        (Teamwork, 2) => "Clear division of work keeps the group on track.",
        (Teamwork, 3) => "You bring people in and make sure everyone contributes.",

        (Adaptability, 0) => "Resisting change makes it harder; give the new a chance.",
        (Adaptability, 1) => "Waiting it out works slowly; small steps help you settle.",
        (Adaptability, 2) => "You balance the old and the new as you adjust.",
        (Adaptability, 3) => "You embrace new situations with curiosity and openness.",

        (Responsibility, 0) => "Hiding a lapse erodes trust; owning it rebuilds it.",
        (Responsibility, 1) => "Blaming circumstances avoids the real fix.",
        (Responsibility, 2) => "You correct the lapse and commit to doing better.",
        (Responsibility, 3) => "You own your mistakes openly and put safeguards in place.",

        (Patience, 0) => "Frustration shuts learning down; a pause helps everyone.",
        (Patience, 1) => "Giving the answer saves time now but not in the long run.",
        (Patience, 2) => "Stepping back and returning later shows self-control.",
        (Patience, 3) => "You adapt your explanation and stay calm until it clicks.",

        (Leadership, 0) => "Leaving it to others means good ideas may never happen.",
        (Leadership, 1) => "You are willing to help; try offering before being asked.",
        (Leadership, 2) => "Taking charge of a part shows growing initiative.",
        (Leadership, 3) => "You step forward, plan and bring out the best in others.",

        _ => return None,
    };
    Some(text)
}

fn hindi_feedback(r#trait: Trait, score: u8) -> Option<&'static str> {
    use Trait::*;
    let text = match (r#trait, score) {
        (Empathy, 0) => "दूसरों की भावनाओं पर ध्यान दें; एक छोटा सा हालचाल बहुत मायने रखता है।",
        (Empathy, 1) => "आप परवाह करते हैं, पर स्वयं जुड़ने के बजाय बात आगे बढ़ा देते हैं।",
        (Empathy, 2) => "आप दूसरों को अपनापन देते हैं और उन्हें स्वागत का अनुभव कराते हैं।",
        (Empathy, 3) => "आप सच्चे मन से सुनते हैं और लोगों को समझा हुआ महसूस कराते हैं।",

        (Decisiveness, 0) => "दूसरों के निर्णय की प्रतीक्षा करने से ज़रूरी फ़ैसले अधूरे रह जाते हैं।",
        (Decisiveness, 1) => "आप जल्दी कदम उठाते हैं, पर हर चुनाव के पीछे कारण होना चाहिए।",
        (Decisiveness, 2) => "आप निर्णय का निष्पक्ष तरीका सुझाकर समूह को आगे बढ़ाते हैं।",
        (Decisiveness, 3) => "आप विकल्पों को तौलकर स्पष्ट और तर्कपूर्ण निर्णय लेते हैं।",

        (Resilience, 0) => "असफलता को अंत न मानें; उसे सीख की तरह लें।",
        (Resilience, 1) => "निराशा देर तक रहती है; उसका जल्दी सामना करना उबरने में मदद करता है।",
        (Resilience, 2) => "आप बात साझा करके आगे बढ़ते हैं, जिससे मज़बूती आती है।",
        (Resilience, 3) => "आप असफलता को योजना में बदल देते हैं; यही सच्चा लचीलापन है।",

        (Courage, 0) => "गलत काम में साथ देना कभी सुरक्षित विकल्प नहीं होता।",
        (Courage, 1) => "आप गलत को पहचानते हैं; अगला कदम उस पर कार्य करना है।",
        (Courage, 2) => "आप तुरंत मदद माँगते हैं, जिससे ज़रूरतमंद की रक्षा होती है।",
        (Courage, 3) => "आप शांति और ज़िम्मेदारी से दूसरों के लिए खड़े होते हैं।",

        (Integrity, 0) => "ईमानदारी तब सबसे ज़्यादा मायने रखती है जब कोई देख न रहा हो।",
        (Integrity, 1) => "अच्छे इरादे तभी गिने जाते हैं जब उन पर तुरंत अमल हो।",
        (Integrity, 2) => "आप ईमानदार निर्णय तक पहुँचते हैं, भले ही थोड़ा समय लगे।",
        (Integrity, 3) => "आपकी ईमानदारी तत्काल और बिना शर्त है।",

        (Teamwork, 0) => "शिकायत करने से टीम बँटती है; सीधी बातचीत आज़माएँ।",
        (Teamwork, 1) => "सारा काम खुद करने से समस्या टीम से छिप जाती है।",
        (Teamwork, 2) => "काम का स्पष्ट बँटवारा समूह को सही दिशा में रखता है।",
        (Teamwork, 3) => "आप सबको साथ लेकर चलते हैं और सबका योगदान सुनिश्चित करते हैं।",

        (Adaptability, 0) => "बदलाव का विरोध उसे और कठिन बनाता है; नए को अवसर दें।",
        (Adaptability, 1) => "इंतज़ार करना धीमा है; छोटे कदम आपको जल्दी ढलने में मदद करते हैं।",
        (Adaptability, 2) => "आप ढलते समय पुराने और नए के बीच संतुलन रखते हैं।",
        (Adaptability, 3) => "आप नई परिस्थितियों को जिज्ञासा और खुलेपन से अपनाते हैं।",

        (Responsibility, 0) => "चूक छिपाने से भरोसा घटता है; उसे स्वीकारने से भरोसा लौटता है।",
        (Responsibility, 1) => "परिस्थितियों को दोष देना असली सुधार से बचना है।",
        (Responsibility, 2) => "आप चूक सुधारते हैं और बेहतर करने का संकल्प लेते हैं।",
        (Responsibility, 3) => "आप अपनी गलतियाँ खुलकर स्वीकारते हैं और आगे के लिए सावधानी रखते हैं।",

        (Patience, 0) => "झुंझलाहट सीखना रोक देती है; थोड़ा विराम सबकी मदद करता है।",
        (Patience, 1) => "उत्तर बता देना अभी समय बचाता है, पर आगे नहीं।",
        (Patience, 2) => "पीछे हटकर बाद में लौटना आत्म-संयम दिखाता है।",
        (Patience, 3) => "आप समझाने का तरीका बदलते हैं और समझ आने तक शांत रहते हैं।",

        (Leadership, 0) => "दूसरों पर छोड़ देने से अच्छे विचार कभी साकार नहीं होते।",
        (Leadership, 1) => "आप मदद को तैयार हैं; कहे जाने से पहले आगे आने की कोशिश करें।",
        (Leadership, 2) => "एक हिस्से की ज़िम्मेदारी लेना बढ़ती पहल दिखाता है।",
        (Leadership, 3) => "आप आगे बढ़कर योजना बनाते हैं और दूसरों का सर्वश्रेष्ठ सामने लाते हैं।",

        _ => return None,
    };
    Some(text)
}

/// English feedback shown right after an option is selected.
pub fn get_individual_feedback(r#trait: Trait, score: u8) -> Result<&'static str, AppError> {
    feedback_for(Language::En, r#trait, score)
}

/// Feedback for `(trait, score)` in the given language.
pub fn feedback_for(lang: Language, r#trait: Trait, score: u8) -> Result<&'static str, AppError> {
    let text = match lang {
        Language::En => english_feedback(r#trait, score),
        Language::Hi => hindi_feedback(r#trait, score),
    };
    text.ok_or_else(|| {
        AppError::UnknownFeedbackKey(format!(
            "no {} feedback for ({}, {})",
            lang.code(),
            r#trait,
            score
        ))
    })
}

// ============ Score Bands ============

/// Qualitative tier of a total score, from least to most favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreBand {
    NeedsGrowth,
    Developing,
    Favorable,
    StronglyFavorable,
}

/// Lower bound (inclusive) of each band, most favorable first. Bands are
/// contiguous and the last one starts at zero.
pub const SCORE_BANDS: [(u32, ScoreBand); 4] = [
    (23, ScoreBand::StronglyFavorable),
    (15, ScoreBand::Favorable),
    (8, ScoreBand::Developing),
    (0, ScoreBand::NeedsGrowth),
];

impl ScoreBand {
    pub const ALL: [ScoreBand; 4] = [
        ScoreBand::NeedsGrowth,
        ScoreBand::Developing,
        ScoreBand::Favorable,
        ScoreBand::StronglyFavorable,
    ];

    pub fn for_score(total: u32) -> ScoreBand {
        SCORE_BANDS
            .iter()
            .find(|(min, _)| total >= *min)
            .map(|(_, band)| *band)
            .unwrap_or(ScoreBand::NeedsGrowth)
    }

    /// Short result line shown on the results step.
    pub fn final_feedback(self, lang: Language) -> &'static str {
        match (self, lang) {
            (ScoreBand::StronglyFavorable, Language::En) => {
                "Excellent! You show strong, well-balanced judgment across a wide range of situations."
            }
            (ScoreBand::Favorable, Language::En) => {
                "Good work! You handle most situations thoughtfully, with a few areas to strengthen."
            }
            (ScoreBand::Developing, Language::En) => {
                "You are on your way. Your judgment is developing and will grow with practice."
            }
            (ScoreBand::NeedsGrowth, Language::En) => {
                "There is room to grow. Reflect on these situations and seek guidance from people you trust."
            }
            (ScoreBand::StronglyFavorable, Language::Hi) => {
                "उत्कृष्ट! आप विभिन्न परिस्थितियों में मज़बूत और संतुलित निर्णय क्षमता दिखाते हैं।"
            }
            (ScoreBand::Favorable, Language::Hi) => {
                "बहुत अच्छा! आप अधिकांश परिस्थितियों को सोच-समझकर संभालते हैं, कुछ क्षेत्रों में सुधार की गुंजाइश है।"
            }
            (ScoreBand::Developing, Language::Hi) => {
                "आप सही राह पर हैं। आपकी निर्णय क्षमता विकसित हो रही है और अभ्यास से और निखरेगी।"
            }
            (ScoreBand::NeedsGrowth, Language::Hi) => {
                "विकास की संभावना है। इन परिस्थितियों पर विचार करें और भरोसेमंद लोगों से मार्गदर्शन लें।"
            }
        }
    }

    /// Longer narrative printed in the certificate summary.
    pub fn final_assessment(self, lang: Language) -> &'static str {
        match (self, lang) {
            (ScoreBand::StronglyFavorable, Language::En) => {
                "The participant consistently chose thoughtful, responsible and caring responses, reflecting strong emotional maturity, sound judgment and a readiness to lead by example."
            }
            (ScoreBand::Favorable, Language::En) => {
                "The participant generally responded with good judgment and consideration for others, showing a solid foundation that can be strengthened further through reflection and experience."
            }
            (ScoreBand::Developing, Language::En) => {
                "The participant shows a developing sense of judgment. With guidance, practice and encouragement, these qualities can grow into consistent strengths."
            }
            (ScoreBand::NeedsGrowth, Language::En) => {
                "The participant would benefit from support in building judgment and emotional skills. Regular reflection and mentoring are recommended to nurture these qualities."
            }
            (ScoreBand::StronglyFavorable, Language::Hi) => {
                "प्रतिभागी ने लगातार विचारशील, ज़िम्मेदार और संवेदनशील उत्तर चुने, जो मज़बूत भावनात्मक परिपक्वता, सही निर्णय क्षमता और उदाहरण प्रस्तुत कर नेतृत्व करने की तत्परता को दर्शाते हैं।"
            }
            (ScoreBand::Favorable, Language::Hi) => {
                "प्रतिभागी ने सामान्यतः अच्छी निर्णय क्षमता और दूसरों के प्रति सम्मान के साथ उत्तर दिए, जो एक ठोस आधार दर्शाता है जिसे चिंतन और अनुभव से और मज़बूत किया जा सकता है।"
            }
            (ScoreBand::Developing, Language::Hi) => {
                "प्रतिभागी में निर्णय क्षमता विकसित हो रही है। मार्गदर्शन, अभ्यास और प्रोत्साहन से ये गुण स्थायी शक्तियों में बदल सकते हैं।"
            }
            (ScoreBand::NeedsGrowth, Language::Hi) => {
                "प्रतिभागी को निर्णय क्षमता और भावनात्मक कौशल विकसित करने में सहयोग से लाभ होगा। इन गुणों को निखारने के लिए नियमित चिंतन और मार्गदर्शन की सलाह दी जाती है।"
            }
        }
    }

    fn from_final_feedback(feedback: &str) -> Option<ScoreBand> {
        Self::ALL
            .into_iter()
            .find(|band| band.final_feedback(Language::En) == feedback)
    }

    fn from_final_assessment(text: &str) -> Option<ScoreBand> {
        Self::ALL
            .into_iter()
            .find(|band| band.final_assessment(Language::En) == text)
    }
}

/// Short English result line for a total score.
pub fn get_final_feedback(total_score: u32) -> &'static str {
    ScoreBand::for_score(total_score).final_feedback(Language::En)
}

/// Expands a short English result line into its narrative.
pub fn get_final_assessment(final_feedback: &str) -> Result<&'static str, AppError> {
    ScoreBand::from_final_feedback(final_feedback)
        .map(|band| band.final_assessment(Language::En))
        .ok_or_else(|| {
            AppError::UnknownFeedbackKey(format!("unknown final feedback: {}", final_feedback))
        })
}

/// Localizes a stored English narrative. Only narratives produced by
/// [`get_final_assessment`] are known.
pub fn localized_final_assessment(
    lang: Language,
    english_text: &str,
) -> Result<&'static str, AppError> {
    ScoreBand::from_final_assessment(english_text)
        .map(|band| band.final_assessment(lang))
        .ok_or_else(|| {
            AppError::UnknownFeedbackKey(format!(
                "no {} final assessment for: {}",
                lang.code(),
                english_text
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_bank::QUESTIONS;

    #[test]
    fn test_every_question_option_has_feedback_in_both_languages() {
        for q in QUESTIONS.iter() {
            for o in q.options {
                for lang in [Language::En, Language::Hi] {
                    let text = feedback_for(lang, q.r#trait, o.score)
                        .unwrap_or_else(|e| panic!("question {}: {}", q.id, e));
                    assert!(!text.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_unknown_feedback_key_fails() {
        let err = get_individual_feedback(Trait::Empathy, 4).unwrap_err();
        assert!(matches!(err, AppError::UnknownFeedbackKey(_)));
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(ScoreBand::for_score(0), ScoreBand::NeedsGrowth);
        assert_eq!(ScoreBand::for_score(7), ScoreBand::NeedsGrowth);
        assert_eq!(ScoreBand::for_score(8), ScoreBand::Developing);
        assert_eq!(ScoreBand::for_score(14), ScoreBand::Developing);
        assert_eq!(ScoreBand::for_score(15), ScoreBand::Favorable);
        assert_eq!(ScoreBand::for_score(22), ScoreBand::Favorable);
        assert_eq!(ScoreBand::for_score(23), ScoreBand::StronglyFavorable);
        assert_eq!(ScoreBand::for_score(30), ScoreBand::StronglyFavorable);
    }

    #[test]
    fn test_band_edges_are_quartiles_of_max_total() {
        let max_total = crate::question_bank::QuestionBank::standard().max_total();
        let edges: Vec<u32> = SCORE_BANDS.iter().map(|(min, _)| *min).collect();
        let expected: Vec<u32> = [3u32, 2, 1, 0]
            .iter()
            .map(|q| (max_total * q).div_ceil(4))
            .collect();
        assert_eq!(edges, expected);
    }

    #[test]
    fn test_every_narrative_has_a_hindi_counterpart() {
        for band in ScoreBand::ALL {
            let feedback = band.final_feedback(Language::En);
            let narrative = get_final_assessment(feedback).unwrap();
            let hindi = localized_final_assessment(Language::Hi, narrative).unwrap();
            assert_eq!(hindi, band.final_assessment(Language::Hi));
            assert_eq!(
                localized_final_assessment(Language::En, narrative).unwrap(),
                narrative
            );
        }
    }

    #[test]
    fn test_final_texts_are_one_to_one() {
        let feedbacks: std::collections::HashSet<&str> = ScoreBand::ALL
            .iter()
            .map(|b| b.final_feedback(Language::En))
            .collect();
        let narratives: std::collections::HashSet<&str> = ScoreBand::ALL
            .iter()
            .map(|b| b.final_assessment(Language::En))
            .collect();
        assert_eq!(feedbacks.len(), 4);
        assert_eq!(narratives.len(), 4);
    }

    #[test]
    fn test_unknown_narrative_fails_loudly() {
        let err = localized_final_assessment(Language::Hi, "something else").unwrap_err();
        assert!(matches!(err, AppError::UnknownFeedbackKey(_)));
    }
}
