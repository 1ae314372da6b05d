//! Recourse catalog shown to tenants whose lease is not compliant

use shared_types::ActionStep;

/// Static list of recourse steps, in the order a tenant should take them.
///
/// The conciliation deadline depends on whether a rent complement is contested.
pub fn action_steps(has_complement_loyer: bool) -> Vec<ActionStep> {
    let conciliation_deadline = if has_complement_loyer {
        "3 mois après la signature du bail pour le complément de loyer"
    } else {
        "Pas de délai pour le dépassement du loyer de référence majoré"
    };

    vec![
        ActionStep {
            title: "Mise en demeure du bailleur".to_string(),
            description: "Envoyez une lettre recommandée avec accusé de réception (LRAR) à votre bailleur pour demander une réduction de loyer au niveau légal.".to_string(),
            url: None,
            deadline: Some("Peut être fait à tout moment pendant le bail".to_string()),
        },
        ActionStep {
            title: "Saisir la Commission départementale de conciliation (CDC)".to_string(),
            description: "Service gratuit de médiation obligatoire avant toute action en justice. La CDC tentera de trouver un accord amiable.".to_string(),
            url: Some("https://www.service-public.fr/particuliers/vosdroits/F1216".to_string()),
            deadline: Some(conciliation_deadline.to_string()),
        },
        ActionStep {
            title: "Saisir le juge des contentieux de la protection".to_string(),
            description: "Si la conciliation échoue, vous pouvez porter l'affaire devant le tribunal judiciaire.".to_string(),
            url: Some("https://www.justice.fr/".to_string()),
            deadline: None,
        },
        ActionStep {
            title: "Signaler sur Paris.fr".to_string(),
            description: "Signalez le non-respect de l'encadrement des loyers à la Ville de Paris.".to_string(),
            url: Some(
                "https://www.paris.fr/pages/l-encadrement-des-loyers-parisiens-en-vigueur-le-1er-aout-2712".to_string(),
            ),
            deadline: None,
        },
        ActionStep {
            title: "Contacter l'ADIL 75".to_string(),
            description: "L'Agence Départementale d'Information sur le Logement vous offre des conseils juridiques gratuits. Tél : 01 42 79 50 34".to_string(),
            url: Some("https://www.adil75.org/".to_string()),
            deadline: None,
        },
    ]
}
