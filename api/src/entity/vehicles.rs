use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub fleet_id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle_assignments::Entity")]
    VehicleAssignments,
}

impl Related<super::vehicle_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
