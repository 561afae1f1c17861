// src/noyau/format.rs
//
// Affichage d’un résultat numérique, règles appliquées dans l’ordre :
// 1) entier            -> conversion par défaut (pas de point forcé),
//                         exponentielle la plus courte à partir de 1e21
// 2) |v| >= 1e12 ou 0 < |v| < 1e-6 -> exponentielle, (précision - 1) chiffres de mantisse
// 3) sinon             -> virgule fixe à `précision` décimales, zéros finaux retirés
//
// Arrondi : une égalité exacte (…5 puis que des zéros) s’arrondit en s’éloignant de zéro
// (0.125 à 2 décimales -> 0.13), dans les deux notations.

use super::eval::ResultatCalcul;

/// Borne haute de la précision d’affichage.
pub const PRECISION_MAX: u8 = 12;

const SEUIL_GRAND: f64 = 1e12;
const SEUIL_PETIT: f64 = 1e-6;
const SEUIL_ENTIER_EXP: f64 = 1e21;

/// Assez de chiffres pour le développement décimal exact de tout f64 (2^-1074).
const CHIFFRES_EXACTS: usize = 1100;

/// Conversion nombre -> texte par défaut (historique, pourcentage).
/// Décimal complet, donc re-tokenisable. `-0` s’affiche `0`.
pub fn texte_brut(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// "…e12" -> "…e+12" ; "…e-7" inchangé.
fn signer_exposant(s: String) -> String {
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// `chiffres` = partie décimale exacte complète ; vrai si la coupe après `garde`
/// chiffres tombe pile sur une moitié.
fn est_egalite(chiffres: &str, garde: usize) -> bool {
    let reste = &chiffres.as_bytes()[garde..];
    reste.first() == Some(&b'5') && reste[1..].iter().all(|&b| b == b'0')
}

/// +1 sur le dernier chiffre d’un nombre décimal texte (signe et point conservés).
/// "-0.12" -> "-0.13", "9.99" -> "10.00".
fn incrementer(s: &str) -> String {
    let mut octets = s.as_bytes().to_vec();
    let mut i = octets.len();
    while i > 0 {
        i -= 1;
        match octets[i] {
            b'.' => continue,
            b'9' => octets[i] = b'0',
            b'-' => break,
            d => {
                octets[i] = d + 1;
                return String::from_utf8_lossy(&octets).into_owned();
            }
        }
    }
    // retenue jusqu’en tête : un chiffre de plus après le signe éventuel
    let debut = usize::from(octets.first() == Some(&b'-'));
    octets.insert(debut, b'1');
    String::from_utf8_lossy(&octets).into_owned()
}

/// Virgule fixe à `p` décimales, égalités exactes arrondies loin de zéro.
fn arrondi_fixe(v: f64, p: usize) -> String {
    let exact = format!("{:.*}", CHIFFRES_EXACTS, v);
    let Some((entier, decimales)) = exact.split_once('.') else {
        return format!("{:.*}", p, v);
    };

    if !est_egalite(decimales, p) {
        return format!("{:.*}", p, v);
    }

    if p == 0 {
        incrementer(entier)
    } else {
        incrementer(&format!("{entier}.{}", &decimales[..p]))
    }
}

/// Mantisse à `chiffres` décimales, exposant toujours signé : 1.50e+12, 3.3e-7.
fn exponentielle(v: f64, chiffres: usize) -> String {
    let exact = format!("{:.*e}", CHIFFRES_EXACTS, v);
    let arrondi = exact.split_once('e').and_then(|(mantisse, exp)| {
        let exp: i32 = exp.parse().ok()?;
        let (unite, decimales) = mantisse.split_once('.')?;
        if !est_egalite(decimales, chiffres) {
            return None;
        }

        let tronquee = if chiffres == 0 {
            unite.to_string()
        } else {
            format!("{unite}.{}", &decimales[..chiffres])
        };
        let montee = incrementer(&tronquee);

        // 9.5 -> 10 : on renormalise en 1.0…e(exp+1)
        let chiffres_unite = montee.trim_start_matches('-').split('.').next()?.len();
        if chiffres_unite > 1 {
            let signe = if v < 0.0 { "-" } else { "" };
            let zeros = "0".repeat(chiffres);
            let m = if chiffres == 0 {
                format!("{signe}1")
            } else {
                format!("{signe}1.{zeros}")
            };
            Some(format!("{m}e{}", exp + 1))
        } else {
            Some(format!("{montee}e{exp}"))
        }
    });

    signer_exposant(arrondi.unwrap_or_else(|| format!("{:.*e}", chiffres, v)))
}

/// Formate une valeur finie sous la précision donnée (bornée à [0, 12]).
pub fn formater(v: f64, precision: u8) -> String {
    let p = usize::from(precision.min(PRECISION_MAX));

    if v.fract() == 0.0 {
        if v.abs() >= SEUIL_ENTIER_EXP {
            // exponentielle la plus courte qui relit la même valeur
            return signer_exposant(format!("{v:e}"));
        }
        return texte_brut(v);
    }

    let abs = v.abs();
    if abs >= SEUIL_GRAND || (v != 0.0 && abs < SEUIL_PETIT) {
        // précision 0 => 0 chiffre de mantisse (pas de compte négatif)
        return exponentielle(v, p.saturating_sub(1));
    }

    // arrondi fixe puis relecture : "2.500000" -> 2.5 -> "2.5"
    let fixe = arrondi_fixe(v, p);
    match fixe.parse::<f64>() {
        Ok(relu) => texte_brut(relu),
        Err(_) => fixe,
    }
}

/// Texte affiché pour un résultat complet : valeur formatée ou message d’erreur.
pub fn formater_resultat(r: &ResultatCalcul, precision: u8) -> String {
    match &r.issue {
        Ok(v) => formater(*v, precision),
        Err(e) => e.to_string(),
    }
}
