use crate::models::plant::PlantRecord;

#[allow(clippy::too_many_arguments)]
fn plant(
    id: &str,
    name: &str,
    latin_name: &str,
    family: &str,
    genus: &str,
    sunlight: &str,
    water_need: &str,
    cold_resistance: &str,
    ornamental_period: &str,
    garden_type: &str,
    color: &str,
) -> PlantRecord {
    PlantRecord {
        id: id.into(),
        name: name.into(),
        latin_name: latin_name.into(),
        family: family.into(),
        genus: genus.into(),
        sunlight: sunlight.into(),
        water_need: water_need.into(),
        cold_resistance: cold_resistance.into(),
        ornamental_period: ornamental_period.into(),
        garden_type: garden_type.into(),
        color: Some(color.into()),
        lifecycle: Some("多年生".into()),
        flower_color: None,
        usage: None,
    }
}

/// Built-in plant catalogue, served when no catalogue file is configured.
pub fn get_all_plants() -> Vec<PlantRecord> {
    vec![
        plant("1", "松果菊", "Echinacea purpurea", "菊科", "松果菊属", "high", "low",
            "耐寒（可耐-30℃低温）", "6-9月", "观赏草甸、昆虫友好花园、疗愈花园", "#E58B4A"),
        plant("2", "鼠尾草", "Salvia nemorosa", "唇形科", "鼠尾草属", "high、medium", "medium-low",
            "耐寒（可耐-25℃低温）", "5-9月", "昆虫友好花园、疗愈花园", "#A88ED0"),
        plant("3", "薰衣草", "Lavandula angustifolia", "唇形科", "薰衣草属", "high", "low",
            "较耐寒", "6-8月", "疗愈花园、岩石花园、昆虫友好花园", "#9A66CC"),
        plant("4", "落新妇", "Astilbe chinensis", "虎耳草科", "落新妇属", "low、medium", "high",
            "耐寒（可耐-30℃低温）", "6-8月", "雨水花园、疗愈花园", "#F3A6B0"),
        plant("5", "玉簪", "Hosta plantaginea", "天门冬科", "玉簪属", "low、medium", "medium",
            "耐寒（可耐-30℃低温）", "7-9月", "疗愈花园、儿童花园", "#E8F0D8"),
        plant("6", "针芒", "Stipa tenuissima", "禾本科", "针茅属", "high", "low",
            "耐寒（可耐-20℃低温）", "秋冬观赏", "观赏草甸、岩石花园", "#6BAF92"),
        plant("7", "千屈菜", "Lythrum salicaria", "千屈菜科", "千屈菜属", "high、medium", "high",
            "耐寒（可耐-25℃低温）", "6-9月", "雨水花园、昆虫友好花园", "#C8509B"),
        plant("8", "西伯利亚鸢尾", "Iris sibirica", "鸢尾科", "鸢尾属", "high、medium", "medium-high",
            "耐寒（可耐-30℃低温）", "4-6月", "雨水花园、观赏草甸", "#5B6FD6"),
        plant("9", "佛甲草", "Sedum lineare", "景天科", "景天属", "high", "low",
            "较耐寒", "5-6月", "岩石花园", "#F2D24B"),
        plant("10", "蜡梅", "Chimonanthus praecox", "蜡梅科", "蜡梅属", "high、medium", "medium-low",
            "耐寒（可耐-15℃低温）", "11-2月", "疗愈花园", "#F5D76E"),
        plant("11", "薄荷", "Mentha haplocalyx", "唇形科", "薄荷属", "medium", "medium-high",
            "耐寒", "叶可食用", "可食花园、儿童花园", "#7FBF7F"),
        plant("12", "草莓", "Fragaria × ananassa", "蔷薇科", "草莓属", "high", "medium",
            "较耐寒", "4-5月", "可食花园、儿童花园", "#E0454B"),
        plant("13", "荚果蕨", "Matteuccia struthiopteris", "球子蕨科", "荚果蕨属", "low", "high",
            "耐寒（可耐-35℃低温）", "全年", "雨水花园、疗愈花园", "#4E8B57"),
        plant("14", "向日葵", "Helianthus annuus", "菊科", "向日葵属", "high", "medium",
            "不耐寒", "7-9月", "儿童花园、可食花园", "#F6C026"),
        plant("15", "三角梅", "Bougainvillea spectabilis", "紫茉莉科", "叶子花属", "high", "medium-low",
            "越冬需10℃以上", "全年", "疗愈花园", "#D6336C"),
        plant("16", "紫金牛", "Ardisia japonica", "报春花科", "紫金牛属", "low", "medium-low",
            "较耐寒", "秋冬观果", "疗愈花园", "#B03A2E"),
        plant("17", "蓝羊茅", "Festuca glauca", "禾本科", "羊茅属", "high", "low",
            "耐寒（可耐-30℃低温）", "5-7月", "岩石花园、观赏草甸", "#8FB8C9"),
    ]
}
