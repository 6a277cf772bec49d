// Phonotactic enumeration of candidate monosyllables and disyllables.
//
// Each shape family is a nested cross-product over inventory sets with a
// family-specific exclusion (a consonant may not recur as both onset and
// coda of one syllable). Families are emitted in a fixed order:
//
//   CVC, sCVC, CwVC, TlVC/TɹVC (interleaved), CNVC/NCVC (interleaved)
//
// and disyllables are emitted per nucleus pair, CVC first syllables before
// T-liquid first syllables. The order is stable and reproducible, but
// carries no meaning beyond "families do not overlap"; the partitioner
// depends on it only through first-discovery order of categories.
//
// Enumeration never fails and never filters on anything but the exclusions
// above; phonological and lexical filtering happen in `filter.rs`.

use crate::grammar::GrammarConfig;
use crate::inventory::{
    CORONAL_STOPS, GLIDE, LATERAL, LAX_NUCLEI, NUCLEI, ONSET_NASALS, RHOTIC, SIBILANT,
    SIMPLE_CODAS, SIMPLE_CODAS_PLUS_S, SIMPLE_ONSETS_PLUS_S, STOP_CODAS, STOPS, STOPS_PLUS_S,
    VOICELESS_STOPS,
};
use crate::types::{Candidate, Disyllable, Monosyllable, ShapeTag};

/// All monosyllables of the enabled families, in enumeration order.
pub fn monosyllables(grammar: &GrammarConfig) -> Vec<Monosyllable> {
    let mut out = Vec::new();

    if grammar.enables_monosyllable(ShapeTag::Cvc) {
        for &onset in SIMPLE_ONSETS_PLUS_S {
            for &nucleus in NUCLEI {
                for &coda in SIMPLE_CODAS_PLUS_S {
                    if onset == coda {
                        continue;
                    }
                    out.push(Monosyllable::new(onset, nucleus, coda, ShapeTag::Cvc));
                }
            }
        }
    }

    if grammar.enables_monosyllable(ShapeTag::SCvc) {
        for &stop in VOICELESS_STOPS {
            let onset = format!("{SIBILANT}{stop}");
            for &nucleus in NUCLEI {
                for &coda in SIMPLE_CODAS {
                    if stop == coda {
                        continue;
                    }
                    out.push(Monosyllable::new(onset.as_str(), nucleus, coda, ShapeTag::SCvc));
                }
            }
        }
    }

    // Labialized onsets take lax nuclei only.
    if grammar.enables_monosyllable(ShapeTag::CwVc) {
        for &stop in STOPS {
            let onset = format!("{stop}{GLIDE}");
            for &nucleus in LAX_NUCLEI {
                for &coda in SIMPLE_CODAS_PLUS_S {
                    if stop == coda {
                        continue;
                    }
                    out.push(Monosyllable::new(onset.as_str(), nucleus, coda, ShapeTag::CwVc));
                }
            }
        }
    }

    let lateral = grammar.enables_monosyllable(ShapeTag::TlVc);
    let rhotic = grammar.enables_monosyllable(ShapeTag::TrVc);
    if lateral || rhotic {
        for &stop in CORONAL_STOPS {
            for &nucleus in NUCLEI {
                for &coda in SIMPLE_CODAS_PLUS_S {
                    if stop == coda {
                        continue;
                    }
                    if lateral {
                        out.push(Monosyllable::new(
                            format!("{stop}{LATERAL}"),
                            nucleus,
                            coda,
                            ShapeTag::TlVc,
                        ));
                    }
                    if rhotic {
                        out.push(Monosyllable::new(
                            format!("{stop}{RHOTIC}"),
                            nucleus,
                            coda,
                            ShapeTag::TrVc,
                        ));
                    }
                }
            }
        }
    }

    let postnasal = grammar.enables_monosyllable(ShapeTag::CnVc);
    let prenasal = grammar.enables_monosyllable(ShapeTag::NcVc);
    if postnasal || prenasal {
        for &stop in STOPS {
            for &coda in STOP_CODAS {
                if stop == coda {
                    continue;
                }
                for &nasal in ONSET_NASALS {
                    for &nucleus in NUCLEI {
                        if postnasal {
                            out.push(Monosyllable::new(
                                format!("{stop}{nasal}"),
                                nucleus,
                                coda,
                                ShapeTag::CnVc,
                            ));
                        }
                        if prenasal {
                            out.push(Monosyllable::new(
                                format!("{nasal}{stop}"),
                                nucleus,
                                coda,
                                ShapeTag::NcVc,
                            ));
                        }
                    }
                }
            }
        }
    }

    out
}

/// All disyllables of the enabled first-syllable templates, in enumeration
/// order.
pub fn disyllables(grammar: &GrammarConfig) -> Vec<Disyllable> {
    let mut out = Vec::new();
    let lateral = grammar.enables_disyllable(ShapeTag::TlVc);
    let rhotic = grammar.enables_disyllable(ShapeTag::TrVc);

    for (nucleus1, nucleus2) in grammar.nucleus_pairing.pairs() {
        if grammar.enables_disyllable(ShapeTag::Cvc) {
            for &onset1 in SIMPLE_ONSETS_PLUS_S {
                for &coda1 in SIMPLE_CODAS_PLUS_S {
                    if onset1 == coda1 {
                        continue;
                    }
                    let syl1 = Monosyllable::new(onset1, nucleus1, coda1, ShapeTag::Cvc);
                    push_with_second_syllables(&mut out, &[syl1], onset1, coda1, nucleus2);
                }
            }
        }

        if lateral || rhotic {
            for &stop1 in CORONAL_STOPS {
                for &coda1 in SIMPLE_CODAS_PLUS_S {
                    if stop1 == coda1 {
                        continue;
                    }
                    let mut firsts = Vec::with_capacity(2);
                    if lateral {
                        let onset = format!("{stop1}{LATERAL}");
                        firsts.push(Monosyllable::new(onset, nucleus1, coda1, ShapeTag::TlVc));
                    }
                    if rhotic {
                        let onset = format!("{stop1}{RHOTIC}");
                        firsts.push(Monosyllable::new(onset, nucleus1, coda1, ShapeTag::TrVc));
                    }
                    push_with_second_syllables(&mut out, &firsts, stop1, coda1, nucleus2);
                }
            }
        }
    }

    out
}

/// Pair each first syllable with every admissible CVC second syllable.
///
/// `initial` is the first syllable's onset consonant (the stop, for
/// clusters); it may not recur as the second onset, and neither may the
/// first coda. The two codas must differ.
fn push_with_second_syllables(
    out: &mut Vec<Disyllable>,
    firsts: &[Monosyllable],
    initial: &str,
    coda1: &str,
    nucleus2: &str,
) {
    for &onset2 in STOPS_PLUS_S {
        if initial == onset2 || coda1 == onset2 {
            continue;
        }
        for &coda2 in SIMPLE_CODAS_PLUS_S {
            if coda1 == coda2 {
                continue;
            }
            let syl2 = Monosyllable::new(onset2, nucleus2, coda2, ShapeTag::Cvc);
            for syl1 in firsts {
                out.push(Disyllable::new(syl1.clone(), syl2.clone()));
            }
        }
    }
}

/// Every candidate of the grammar: monosyllables, then disyllables.
pub fn candidates(grammar: &GrammarConfig) -> Vec<Candidate> {
    monosyllables(grammar)
        .into_iter()
        .map(Candidate::Mono)
        .chain(disyllables(grammar).into_iter().map(Candidate::Di))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{NucleusPairing, default_grammar};
    use crate::inventory::is_tense;
    use std::collections::{BTreeMap, BTreeSet};

    fn shape_counts(monos: &[Monosyllable]) -> BTreeMap<ShapeTag, usize> {
        let mut counts = BTreeMap::new();
        for m in monos {
            *counts.entry(m.shape).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_monosyllable_family_sizes() {
        let counts = shape_counts(&monosyllables(&default_grammar()));
        assert_eq!(counts[&ShapeTag::Cvc], 627);
        assert_eq!(counts[&ShapeTag::SCvc], 165);
        assert_eq!(counts[&ShapeTag::CwVc], 156);
        assert_eq!(counts[&ShapeTag::TlVc], 143);
        assert_eq!(counts[&ShapeTag::TrVc], 143);
        assert_eq!(counts[&ShapeTag::CnVc], 330);
        assert_eq!(counts[&ShapeTag::NcVc], 330);
    }

    #[test]
    fn test_no_consonant_is_both_onset_edge_and_coda() {
        for m in monosyllables(&default_grammar()) {
            assert_ne!(m.onset, m.coda);
            assert!(
                !m.onset.starts_with(m.coda.as_str()) && !m.onset.ends_with(m.coda.as_str()),
                "{} repeats its coda in the onset",
                m.transcription()
            );
        }
    }

    #[test]
    fn test_labialized_onsets_take_lax_nuclei() {
        for m in monosyllables(&default_grammar()) {
            if m.shape == ShapeTag::CwVc {
                assert!(!is_tense(&m.nucleus), "{}", m.transcription());
            }
        }
    }

    #[test]
    fn test_enumeration_order_starts_with_cvc() {
        let monos = monosyllables(&default_grammar());
        assert_eq!(monos[0], Monosyllable::new("p", "iː", "m", ShapeTag::Cvc));
        assert_eq!(monos.last().map(|m| m.shape), Some(ShapeTag::NcVc));
    }

    #[test]
    fn test_monosyllables_are_unique() {
        let monos = monosyllables(&default_grammar());
        let distinct: BTreeSet<String> = monos.iter().map(|m| m.transcription()).collect();
        assert_eq!(distinct.len(), monos.len());
    }

    #[test]
    fn test_disyllable_count_lax_permutation() {
        let dis = disyllables(&default_grammar());
        assert_eq!(dis.len(), 33408);
        let first = &dis[0];
        assert_eq!(first.transcription(), "pɪmtʊn");
        let last = dis.last().unwrap();
        assert_eq!(last.transcription(), "dɹæsgɛk");
    }

    #[test]
    fn test_disyllable_cross_syllable_constraints() {
        for d in disyllables(&default_grammar()) {
            assert!(STOPS_PLUS_S.contains(&d.syl2.onset.as_str()));
            assert_eq!(d.syl2.shape, ShapeTag::Cvc);
            assert_ne!(d.syl1.coda, d.syl2.onset);
            assert_ne!(d.syl1.coda, d.syl2.coda);
            assert!(!d.syl1.onset.starts_with(d.syl2.onset.as_str()));
            assert_ne!(d.syl1.nucleus, d.syl2.nucleus);
        }
    }

    #[test]
    fn test_tense_lax_grammar_pairs_nuclei() {
        let json = include_str!("../../data/grammar_tense_lax.json");
        let grammar = GrammarConfig::from_json(json).unwrap();
        assert_eq!(grammar.nucleus_pairing, NucleusPairing::TenseLax);
        let dis = disyllables(&grammar);
        assert_eq!(dis.len(), 33408 / 12 * 28);
        for d in &dis {
            assert!(is_tense(&d.syl1.nucleus));
            assert!(!is_tense(&d.syl2.nucleus));
        }
    }

    #[test]
    fn test_disabled_families_are_skipped() {
        let mut grammar = default_grammar();
        grammar.monosyllable_shapes = vec![ShapeTag::TrVc];
        grammar.disyllable_shapes = vec![ShapeTag::TlVc];
        let monos = monosyllables(&grammar);
        assert!(monos.iter().all(|m| m.shape == ShapeTag::TrVc));
        assert_eq!(monos.len(), 143);
        let dis = disyllables(&grammar);
        assert!(dis.iter().all(|d| d.syl1.shape == ShapeTag::TlVc));
    }

    #[test]
    fn test_candidates_monosyllables_first() {
        let grammar = default_grammar();
        let all = candidates(&grammar);
        assert_eq!(all.len(), 1894 + 33408);
        assert!(matches!(all[0], Candidate::Mono(_)));
        assert!(matches!(all[1894], Candidate::Di(_)));
    }
}
