//! Static disease information table
//!
//! Maps each class label to a canned descriptive paragraph. The texts are a
//! fixed editorial table, not a knowledge base; lookups are by exact label
//! string with a fallback for unknown keys.

/// Returned when no entry matches the requested label
pub const FALLBACK_INFO: &str = "Information not available for this disease.";

/// Look up the description for a disease label.
///
/// The key must match a class label exactly; anything else yields
/// [`FALLBACK_INFO`].
pub fn disease_info(name: &str) -> &'static str {
    match name {
        "BA- cellulitis" => {
            "Bacteremia-associated (BA) cellulitis is a serious complication where a skin \
             infection spreads to the bloodstream. While cellulitis is typically localized, \
             systemic symptoms like fever, chills, and fatigue can indicate bacteremia, a \
             potentially life-threatening condition. It is a rare complication, occurring in \
             only about 5\u{2013}10% of cases, but is more common in immunocompromised patients, \
             those with diabetes, and the elderly. If left untreated, it can lead to further \
             complications like sepsis, endocarditis, or osteomyelitis."
        }
        "BA-impetigo" => {
            "Impetigo is a highly contagious bacterial skin infection that most commonly \
             affects infants and young children, often appearing around the nose, mouth, \
             hands, and feet. The sores quickly rupture, ooze fluid, and develop a \
             characteristic honey-colored crust. The infection is primarily caused by \
             Staphylococcus aureus or Streptococcus pyogenes bacteria, which can enter the \
             body through a cut, scrape, or insect bite. Treatment with antibiotics, either \
             topical or oral, is used to clear the infection and limit its spread"
        }
        "FU-athlete-foot" => {
            "Athlete's foot, or tinea pedis, is a contagious fungal infection that typically \
             causes an itchy, scaly, and burning rash, most commonly between the toes. It \
             thrives in warm, moist environments like sweaty shoes and socks, and can spread \
             through contact with infected people or surfaces in public places like pools \
             and locker rooms. The infection can also cause dry, cracked skin on the soles \
             or blisters on the feet. Treatment usually involves over-the-counter or \
             prescription antifungal creams, powders, or sprays."
        }
        "FU-nail-fungus" => {
            "Nail fungus, or onychomycosis, is a common infection that makes nails thick, \
             discolored, and brittle. It is most often caused by a type of fungus called \
             dermatophyte, and thrives in warm, moist environments like shoes and public \
             showers. The infection can lead to misshapen, crumbling nails and may emit a \
             foul odor. While generally not serious for healthy individuals, it can be \
             persistent, difficult to treat, and poses a risk of further infection for \
             those with diabetes or weakened immune systems."
        }
        "FU-ringworm" => {
            "Ringworm is a common, contagious fungal infection of the skin, not caused by a \
             worm. It appears as a red, itchy, ring-shaped rash, but symptoms can vary and \
             may include scaly, raised patches. It spreads through direct contact with an \
             infected person, animal, or contaminated surfaces like clothing and towels, \
             and is treated with antifungal medication."
        }
        "PA-cutaneous-larva-migrans" => {
            "Cutaneous larva migrans (CLM), or 'creeping eruption' is a parasitic skin \
             infection caused by hookworm larvae. Humans are accidental hosts who become \
             infected through direct skin contact with warm, moist soil or sand \
             contaminated with animal feces. The larvae, most commonly from dog and cat \
             hookworms, burrow into the skin but cannot penetrate past the outer layer. \
             This migration causes intensely itchy, red, winding tracks on the skin, \
             typically on the feet, legs, or buttocks."
        }
        "VI-chickenpox" => {
            "Chickenpox is a highly contagious viral infection caused by the \
             varicella-zoster virus (VZV). It is characterized by an itchy rash of \
             fluid-filled blisters that eventually scab over, accompanied by symptoms like \
             fever and fatigue. While typically mild in children, it can cause serious \
             complications in adults, pregnant women, and those with weakened immune \
             systems."
        }
        "VI-shingles" => {
            "Shingles is a reactivation of the chickenpox virus causing painful rashes and \
             nerve pain on one side of the body. VI, or the abducens nerve, is rarely \
             affected by shingles, a viral infection caused by the varicella-zoster virus. \
             This condition, a complication of herpes zoster ophthalmicus (HZO), can lead \
             to abducens nerve palsy. The palsy causes weakness or paralysis of the lateral \
             rectus muscle, leading to an impaired ability to move the eye outwards. \
             Symptoms include horizontal double vision and the inability to abduct the \
             affected eye. While recovery is common, the diplopia can persist for weeks or \
             months after the initial rash has subsided."
        }
        "Actinic Keratosis" => {
            "An actinic keratosis (ak-TIN-ik ker-uh-TOE-sis) is a rough, scaly patch on the \
             skin that develops from years of sun exposure. It's often found on the face, \
             lips, ears, forearms, scalp, neck or back of the hands,, increase the risk of \
             developing skin cancer."
        }
        "Bowen Disease" => {
            "Bowen disease is a pre-cancerous skin condition with a low risk of progressing \
             to invasive squamous cell carcinoma (SCC), estimated at 3%\u{2013}5%. Key risk \
             factors for developing the condition include excessive sun exposure, fair \
             skin, older age, and a weakened immune system. While the prognosis is \
             generally excellent with treatment, the lesions can be progressive, and if \
             they become invasive, one-third may potentially metastasize."
        }
        _ => FALLBACK_INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CLASS_NAMES;

    #[test]
    fn test_every_label_has_info() {
        for name in CLASS_NAMES {
            let info = disease_info(name);
            assert!(!info.is_empty(), "empty description for {}", name);
            assert_ne!(info, FALLBACK_INFO, "fallback description for {}", name);
        }
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(disease_info("Eczema"), FALLBACK_INFO);
        assert_eq!(disease_info(""), FALLBACK_INFO);
        // Lookup is exact, case matters
        assert_eq!(disease_info("fu-ringworm"), FALLBACK_INFO);
    }

    #[test]
    fn test_known_label_content() {
        assert!(disease_info("FU-ringworm").contains("tinea") || disease_info("FU-ringworm").contains("fungal"));
        assert!(disease_info("VI-chickenpox").contains("varicella-zoster"));
    }
}
