use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use super::error::{ConfiguratorError, Result};

/// Physical properties listed in the detail view. Values are display text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Characteristics {
    pub density: String,
    pub hardness: String,
    pub durability: String,
    pub color: String,
}

/// Everything the detail view shows besides the gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDetails {
    pub characteristics: Characteristics,
    pub applications: Vec<String>,
    pub recommendations: Vec<String>,
    pub description: String,
}

/// One selectable material swatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Detail-view images; the thumbnail stands in when empty.
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub details: Option<MaterialDetails>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            gallery: Vec::new(),
            details: None,
        }
    }

    pub fn with_gallery(mut self, gallery: Vec<String>) -> Self {
        self.gallery = gallery;
        self
    }

    pub fn with_details(mut self, details: MaterialDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn gallery_len(&self) -> usize {
        self.gallery.len().max(1)
    }

    pub fn gallery_image(&self, index: usize) -> &str {
        self.gallery
            .get(index)
            .map(String::as_str)
            .unwrap_or(&self.image)
    }
}

/// Ordered, immutable set of catalog items with an id index.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_id: FnvHashMap<String, usize>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut by_id = FnvHashMap::default();
        for (i, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), i).is_some() {
                return Err(ConfiguratorError::DuplicateItemId(item.id.clone()));
            }
        }
        Ok(Self { items, by_id })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| ConfiguratorError::UnknownItemReference(id.to_string()))
    }

    pub fn by_id(&self, id: &str) -> Result<&CatalogItem> {
        self.index_of(id).map(|i| &self.items[i])
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }
}

fn pexels(photo: u32, w: u32, h: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w={w}&h={h}&fit=crop"
    )
}

const OAK_THUMB: &str = "https://www.canva.com/design/DAGpk0gyHu0/Wf27fDkBifMiP2BDOlKnNg/view";

fn owned(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

struct Wood {
    id: &'static str,
    name: &'static str,
    /// Pexels photo id of the thumbnail; 0 = `OAK_THUMB`.
    thumb: u32,
    gallery: [u32; 3],
    density: &'static str,
    hardness: &'static str,
    durability: &'static str,
    color: &'static str,
    applications: &'static [&'static str],
    recommendations: &'static [&'static str],
    description: &'static str,
}

impl Wood {
    fn item(&self) -> CatalogItem {
        let image = match self.thumb {
            0 => OAK_THUMB.to_string(),
            photo => pexels(photo, 120, 100),
        };
        CatalogItem::new(self.id, self.name, image)
            .with_gallery(self.gallery.iter().map(|&p| pexels(p, 400, 300)).collect())
            .with_details(MaterialDetails {
                characteristics: Characteristics {
                    density: self.density.to_string(),
                    hardness: self.hardness.to_string(),
                    durability: self.durability.to_string(),
                    color: self.color.to_string(),
                },
                applications: owned(self.applications),
                recommendations: owned(self.recommendations),
                description: self.description.to_string(),
            })
    }
}

const WOODS: [Wood; 12] = [
    Wood {
        id: "oak",
        name: "Chêne",
        thumb: 0,
        gallery: [1108572, 1267239, 129733],
        density: "0.75 g/cm³",
        hardness: "Très dur",
        durability: "Excellente",
        color: "Brun doré à brun foncé",
        applications: &["Parquets haut de gamme", "Mobilier traditionnel", "Charpente", "Tonnellerie"],
        recommendations: &["Idéal pour les projets durables", "Résiste bien à l'humidité", "Nécessite un traitement préventif"],
        description: "Le chêne est un bois noble reconnu pour sa robustesse exceptionnelle et sa longévité. Très apprécié en ébénisterie et construction.",
    },
    Wood {
        id: "walnut",
        name: "Noyer",
        thumb: 1108572,
        gallery: [1108573, 1108574, 1267360],
        density: "0.65 g/cm³",
        hardness: "Dur",
        durability: "Bonne",
        color: "Brun chocolat avec veines foncées",
        applications: &["Mobilier de luxe", "Instruments de musique", "Décoration intérieure", "Sculptures"],
        recommendations: &["Excellent pour le travail fin", "Finition naturelle recommandée", "Éviter l'exposition directe au soleil"],
        description: "Le noyer est prisé pour sa beauté naturelle et ses veines distinctives. Un choix premium pour les créations artistiques.",
    },
    Wood {
        id: "maple",
        name: "Érable",
        thumb: 129733,
        gallery: [129733, 1108099, 1108101],
        density: "0.70 g/cm³",
        hardness: "Dur",
        durability: "Très bonne",
        color: "Blanc crème à brun pâle",
        applications: &["Parquets sportifs", "Plans de travail", "Mobilier moderne", "Instruments"],
        recommendations: &["Excellent pour la teinture", "Résistant à l'usure", "Facile à travailler"],
        description: "L'érable offre une surface lisse et uniforme, parfaite pour les finitions modernes et les applications nécessitant une grande résistance.",
    },
    Wood {
        id: "pine",
        name: "Pin",
        thumb: 1267239,
        gallery: [1267239, 1108102, 1108103],
        density: "0.50 g/cm³",
        hardness: "Tendre",
        durability: "Moyenne",
        color: "Jaune pâle à brun rosé",
        applications: &["Construction légère", "Mobilier rustique", "Lambris", "Emballage"],
        recommendations: &["Traitement anti-insectes recommandé", "Bon rapport qualité-prix", "Facile à usiner"],
        description: "Le pin est un bois résineux économique et polyvalent, idéal pour les projets de construction et le mobilier d'entrée de gamme.",
    },
    Wood {
        id: "cedar",
        name: "Cèdre",
        thumb: 1108101,
        gallery: [1108101, 1108575, 1267239],
        density: "0.38 g/cm³",
        hardness: "Tendre",
        durability: "Excellente (naturellement)",
        color: "Rouge-brun avec aubier blanc",
        applications: &["Bardage extérieur", "Terrasses", "Saunas", "Mobilier de jardin"],
        recommendations: &["Résistance naturelle aux intempéries", "Parfum agréable", "Aucun traitement nécessaire"],
        description: "Le cèdre est naturellement résistant aux insectes et à la pourriture, en faisant un choix excellent pour les applications extérieures.",
    },
    Wood {
        id: "birch",
        name: "Bouleau",
        thumb: 1108099,
        gallery: [1108099, 129733, 1108572],
        density: "0.65 g/cm³",
        hardness: "Mi-dur",
        durability: "Bonne",
        color: "Blanc à jaune pâle",
        applications: &["Contreplaqué", "Mobilier scandinave", "Jouets", "Artisanat"],
        recommendations: &["Excellent pour la peinture", "Grain fin et régulier", "Économique"],
        description: "Le bouleau offre un grain fin et une couleur claire, parfait pour les designs modernes et les finitions peintes.",
    },
    Wood {
        id: "cherry",
        name: "Cerisier",
        thumb: 1108102,
        gallery: [1108102, 1108573, 1267360],
        density: "0.60 g/cm³",
        hardness: "Mi-dur",
        durability: "Bonne",
        color: "Rose saumon à brun rougeâtre",
        applications: &["Mobilier haut de gamme", "Boiseries", "Instruments", "Décoration"],
        recommendations: &["Patine avec le temps", "Finition à l'huile recommandée", "Éviter l'humidité excessive"],
        description: "Le cerisier développe une patine riche avec le temps, offrant une beauté naturelle incomparable pour les projets de prestige.",
    },
    Wood {
        id: "mahogany",
        name: "Acajou",
        thumb: 1108573,
        gallery: [1108573, 1108574, 1108572],
        density: "0.55 g/cm³",
        hardness: "Mi-dur",
        durability: "Excellente",
        color: "Brun rougeâtre profond",
        applications: &["Mobilier de luxe", "Bateaux", "Instruments de musique", "Sculptures"],
        recommendations: &["Résistant aux insectes", "Stable dimensionnellement", "Finition naturelle sublime"],
        description: "L'acajou est le bois de référence pour le mobilier de luxe, offrant stabilité, beauté et facilité de travail exceptionnelles.",
    },
    Wood {
        id: "ash",
        name: "Frêne",
        thumb: 1108574,
        gallery: [1108574, 129733, 1108099],
        density: "0.75 g/cm³",
        hardness: "Dur",
        durability: "Bonne",
        color: "Blanc crème à brun pâle",
        applications: &["Manches d'outils", "Articles de sport", "Parquets", "Mobilier robuste"],
        recommendations: &["Très résistant aux chocs", "Excellent pour le cintrage", "Séchage lent nécessaire"],
        description: "Le frêne est reconnu pour sa résistance exceptionnelle aux chocs, en faisant le choix privilégié pour les applications exigeantes.",
    },
    Wood {
        id: "beech",
        name: "Hêtre",
        thumb: 1267360,
        gallery: [1267360, 1108101, 1108572],
        density: "0.72 g/cm³",
        hardness: "Dur",
        durability: "Moyenne",
        color: "Blanc rosé à brun clair",
        applications: &["Mobilier", "Jouets", "Ustensiles de cuisine", "Parquets"],
        recommendations: &["Excellent pour le tournage", "Traitement anti-humidité nécessaire", "Facile à teinter"],
        description: "Le hêtre offre un grain fin et régulier, parfait pour les applications nécessitant une surface lisse et uniforme.",
    },
    Wood {
        id: "teak",
        name: "Teck",
        thumb: 1108103,
        gallery: [1108103, 1108573, 1108574],
        density: "0.67 g/cm³",
        hardness: "Dur",
        durability: "Exceptionnelle",
        color: "Brun doré avec veines foncées",
        applications: &["Mobilier de jardin", "Ponts de bateaux", "Salles de bain", "Terrasses"],
        recommendations: &["Résistance naturelle à l'eau", "Aucun traitement nécessaire", "Investissement à long terme"],
        description: "Le teck est le roi des bois exotiques, offrant une résistance naturelle exceptionnelle à l'eau et aux intempéries.",
    },
    Wood {
        id: "bamboo",
        name: "Bambou",
        thumb: 1108575,
        gallery: [1108575, 1267239, 129733],
        density: "0.60 g/cm³",
        hardness: "Mi-dur",
        durability: "Bonne",
        color: "Jaune pâle à brun miel",
        applications: &["Parquets écologiques", "Mobilier moderne", "Cloisons", "Décoration"],
        recommendations: &["Croissance rapide et durable", "Résistant à l'humidité", "Écologique"],
        description: "Le bambou est une alternative écologique moderne, offrant résistance et beauté tout en respectant l'environnement.",
    },
];

/// The built-in wood species. Thumbnails are 120x100, gallery shots 400x300.
pub fn wood_catalog() -> Catalog {
    match Catalog::new(WOODS.iter().map(Wood::item).collect()) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("[catalog] built-in woods rejected: {}", e);
            Catalog::default()
        }
    }
}
