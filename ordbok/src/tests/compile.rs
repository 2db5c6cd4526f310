use std::collections::HashSet;

use super::*;

use crate::lexicon::{Entry, Forms, NO_FORM, VerbForms, WordType};

#[test]
fn test_compile_is_idempotent() {
    let compiler = LexiconCompiler::new();
    let mut first = vec![];
    compiler.compile(corpus()).0.write(&mut first).unwrap();
    let mut second = vec![];
    compiler.compile(corpus()).0.write(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_surfaces_are_unique() {
    let lexicon = compile_corpus();
    let surfaces: HashSet<&str> = lexicon.iter().map(|(surface, _)| surface).collect();
    assert_eq!(surfaces.len(), lexicon.len());
}

#[test]
fn test_forms_refer_to_base_entries() {
    let lexicon = compile_corpus();
    let mut forms = 0;
    for (surface, entry) in lexicon.iter() {
        let Some(base_word) = entry.base_word() else {
            continue;
        };
        forms += 1;
        assert!(
            matches!(lexicon.get(base_word), Some(Entry::Base(base)) if base.word == base_word),
            "{surface} refers to a missing base word {base_word}"
        );
    }
    assert!(forms > 0);
}

#[test]
fn test_form_never_overwrites_base() {
    let entries = [
        RawLexicalEntry::new("var", "ab", "ab_1_var").unwrap(),
        RawLexicalEntry::new("vara", "vb", "vb_4m_vara").unwrap(),
    ];
    let (lexicon, report) = LexiconCompiler::new().compile(entries);
    let Some(Entry::Base(var)) = lexicon.get("var") else {
        panic!("var should stay a base entry");
    };
    assert_eq!(var.word_type, WordType::Adverb);
    assert_eq!(report.form_collisions, 1);
    assert_eq!(lexicon.get("varit").and_then(Entry::base_word), Some("vara"));
}

#[test]
fn test_first_form_wins() {
    let lexicon = compile_corpus();
    assert_eq!(lexicon.get("lagar").and_then(Entry::base_word), Some("laga"));
    assert_eq!(lexicon.get("lagarna").and_then(Entry::base_word), Some("lag"));
}

#[test]
fn test_noun_forms_round_trip() {
    let data = "\
hus,nn,nn_6n_hus
bil,nn,nn_2u_bil
bild,nn,nn_3u_bild
äpple,nn,nn_5n_äpple
kaffe,nn,nn_0u_kaffe
flicka,nn,nn_1u_flicka
";
    let entries = read_csv(data.as_bytes()).unwrap();
    let (lexicon, _) = LexiconCompiler::new().compile(entries);

    let mut checked = 0;
    for (word, entry) in lexicon.iter() {
        let Entry::Base(base) = entry else {
            continue;
        };
        let Forms::Noun(forms) = &base.forms else {
            panic!("{word} should have a declension");
        };
        for slot in forms.as_array() {
            if slot == NO_FORM || slot == word {
                continue;
            }
            assert_eq!(
                lexicon.get(slot).and_then(Entry::base_word),
                Some(word),
                "{slot} should refer to {word}"
            );
            checked += 1;
        }
    }
    // hus: 2, bil/bild/äpple/flicka: 3, kaffe: 1
    assert_eq!(checked, 15);
}

#[test]
fn test_vara_is_irregular_verb() {
    let lexicon = compile_corpus();
    let Some(Entry::Base(vara)) = lexicon.get("vara") else {
        panic!("vara should be a base entry");
    };
    assert_eq!(vara.word_type, WordType::Verb);
    assert_eq!(vara.group, "Irregular verb (vara)");
    assert_eq!(
        vara.forms,
        Forms::Verb(VerbForms::new("vara", "är", "var", "varit"))
    );
}

#[test]
fn test_stor_is_adjective() {
    let lexicon = compile_corpus();
    let Some(Entry::Base(stor)) = lexicon.get("stor") else {
        panic!("stor should be a base entry");
    };
    assert_eq!(stor.word_type, WordType::Adjective);
    let Forms::Adjective(forms) = &stor.forms else {
        panic!("stor should have adjective forms");
    };
    assert_eq!(forms.comparative, "större");
    assert_eq!(forms.superlative, "störst");
    assert_eq!(lexicon.get("större").map(Entry::word_type), Some(&WordType::Adjective));
}

#[test]
fn test_bare_entries() {
    let lexicon = compile_corpus();
    let binda = lexicon.get("binda").unwrap();
    assert_eq!(binda.word_type(), &WordType::Verb);
    assert_eq!(binda.group(), "Verb group 4 (strong)");
    assert!(binda.forms().is_none());

    let och = lexicon.get("och").unwrap();
    assert_eq!(och.word_type(), &WordType::Unknown);
}

#[test]
fn test_json_export_matches_artifact() {
    let lexicon = compile_corpus();
    let mut json = vec![];
    lexicon.write_json(&mut json).unwrap();
    let from_json = CompiledLexicon::from_json_reader(json.as_slice()).unwrap();

    let mut expected = vec![];
    lexicon.write(&mut expected).unwrap();
    let mut actual = vec![];
    from_json.write(&mut actual).unwrap();
    assert_eq!(expected, actual);
}
