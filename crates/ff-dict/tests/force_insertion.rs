use ff_dict::*;
use proptest::prelude::*;
use std::num::NonZeroU32;

const CONTROL_DICT: &str = r#"/*--------------------------------*- C++ -*----------------------------------*\
  =========                 |
  \\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox
\*---------------------------------------------------------------------------*/
FoamFile
{
    version     2.0;
    format      ascii;
    class       dictionary;
    object      controlDict;
}
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //

application     olaDyMFlow;

startFrom       latestTime;

endTime         20;

deltaT          0.01;

writeControl    adjustableRunTime;

functions
{
    inletFlux
    {
        type            surfaceFieldValue;
        libs            ("libfieldFunctionObjects.so");
        regionType      patch;
        name            inlet;
    }
}

// ************************************************************************* //
"#;

fn force(floors: u32, patches: &str) -> ForceFunction {
    ForceFunction::new(NonZeroU32::new(floors).unwrap(), patches)
}

fn functions_line(dict: &ControlDict) -> usize {
    dict.lines()
        .iter()
        .position(|l| l.starts_with("functions"))
        .unwrap()
}

#[test]
fn renders_floor_count_and_patches() {
    let mut dict = ControlDict::parse(CONTROL_DICT);
    insert_force_function(&mut dict, &force(5, "Building"), InsertStrategy::Legacy).unwrap();

    let lines = dict.lines();
    assert!(lines.iter().any(|l| l == "\t\t\tnBin\t5;\n"));
    assert!(lines.iter().any(|l| l == "\t\tpatches\t(Building);\n"));
}

#[test]
fn inserted_stanza_opens_the_functions_block() {
    for strategy in [InsertStrategy::Legacy, InsertStrategy::Structural] {
        let mut dict = ControlDict::parse(CONTROL_DICT);
        let insertion = insert_force_function(&mut dict, &force(7, "Building"), strategy).unwrap();

        let anchor = functions_line(&dict);
        assert_eq!(insertion.index, anchor + 2, "{strategy}");
        assert_eq!(dict.lines()[anchor + 3], "\tbuildingsForces\n");
        // The existing function object follows the new stanza untouched.
        assert_eq!(dict.lines()[anchor + 2 + 22], "    inletFlux\n");
    }
}

#[test]
fn existing_lines_survive_in_order() {
    let original = ControlDict::parse(CONTROL_DICT);
    let mut dict = original.clone();
    let insertion =
        insert_force_function(&mut dict, &force(3, "Building"), InsertStrategy::Structural)
            .unwrap();

    let lines = dict.lines();
    let (head, rest) = original.lines().split_at(insertion.index);
    assert_eq!(&lines[..insertion.index], head);
    assert_eq!(&lines[insertion.index + insertion.inserted_lines..], rest);
}

#[test]
fn balance_is_preserved() {
    let before = brace_balance(ControlDict::parse(CONTROL_DICT).lines());
    assert!(before.is_balanced());

    for strategy in [InsertStrategy::Legacy, InsertStrategy::Structural] {
        let mut dict = ControlDict::parse(CONTROL_DICT);
        insert_force_function(&mut dict, &force(10, "Building"), strategy).unwrap();
        let after = brace_balance(dict.lines());
        assert!(after.is_balanced());
        assert_eq!(after.opens, before.opens + 2);
        assert_eq!(after.closes, before.closes + 2);
    }
}

#[test]
fn rerun_appends_a_second_stanza() {
    let mut dict = ControlDict::parse(CONTROL_DICT);
    let f = force(4, "Building");
    insert_force_function(&mut dict, &f, InsertStrategy::Legacy).unwrap();
    insert_force_function(&mut dict, &f, InsertStrategy::Legacy).unwrap();

    assert_eq!(count_stanzas(dict.lines(), "buildingsForces"), 2);
    assert_eq!(count_stanzas(dict.lines(), "binData"), 2);
    assert!(brace_balance(dict.lines()).is_balanced());
}

#[test]
fn synthesized_block_is_closed_after_the_stanza() {
    let text = "application simpleFoam;\nendTime 100;\n";
    for strategy in [InsertStrategy::Legacy, InsertStrategy::Structural] {
        let mut dict = ControlDict::parse(text);
        let insertion = insert_force_function(&mut dict, &force(2, "Building"), strategy).unwrap();
        assert!(insertion.synthesized_functions);
        assert_eq!(insertion.inserted_lines, 26);

        let span = scan::find_block(dict.lines(), "functions").unwrap().unwrap();
        assert_eq!(span.close_line, dict.len() - 1);
        assert_eq!(count_stanzas(dict.lines(), "buildingsForces"), 1);
        assert!(dict.to_text().starts_with(text));
    }
}

#[test]
fn comma_joined_patches_are_verbatim() {
    let mut dict = ControlDict::parse(CONTROL_DICT);
    insert_force_function(
        &mut dict,
        &force(1, "Building,Roof"),
        InsertStrategy::Structural,
    )
    .unwrap();
    assert!(dict.lines().iter().any(|l| l == "\t\tpatches\t(Building,Roof);\n"));
}

fn body_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-eg-z]{1,8} [0-9]{1,3};\n",
        Just("\n".to_string()),
        "// [a-z{} ]{0,10}\n",
    ]
}

proptest! {
    #[test]
    fn insertion_keeps_balance_and_fidelity(
        head in prop::collection::vec(body_line(), 0..6),
        inner in prop::collection::vec(body_line(), 0..6),
        tail in prop::collection::vec(body_line(), 0..6),
        floors in 1u32..200,
        patches in "[A-Za-z][A-Za-z0-9_,]{0,12}",
        legacy in any::<bool>(),
    ) {
        let mut lines = head.clone();
        lines.push("functions\n".to_string());
        lines.push("{\n".to_string());
        lines.extend(inner.clone());
        lines.push("}\n".to_string());
        lines.extend(tail.clone());
        let original = ControlDict::from_lines(lines);

        let strategy = if legacy { InsertStrategy::Legacy } else { InsertStrategy::Structural };
        let mut dict = original.clone();
        let insertion =
            insert_force_function(&mut dict, &force(floors, &patches), strategy).unwrap();

        prop_assert!(brace_balance(dict.lines()).is_balanced());
        prop_assert_eq!(dict.len(), original.len() + 22);
        prop_assert_eq!(insertion.index, head.len() + 2);
        let at = insertion.index;
        prop_assert_eq!(&dict.lines()[..at], &original.lines()[..at]);
        prop_assert_eq!(&dict.lines()[at + 22..], &original.lines()[at..]);

        let nbin = format!("\t\t\tnBin\t{};\n", floors);
        prop_assert!(dict.lines().contains(&nbin));
    }
}
