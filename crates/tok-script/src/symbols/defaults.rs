//! Built-in tables for Emperor: Battle for Dune (GAME.EXE, English 1.09).
//!
//! Function/keyword names are indexed by token id. Ids below
//! [`super::DEFAULT_KEYWORD_THRESHOLD`] are callable functions.
//! Type names are indexed by `STR[n]`: buildings, then units in
//! `rules.txt` `[UnitTypes]` order. The game substitutes house variants at
//! spawn time, so a name here is the variant the table happens to list.

pub const DEFAULT_FUNCTIONS: [&str; 181] = [
    "ModelTick", "Random", "Multiplayer", "GetUnusedBasePoint", "GetSideBasePoint",
    "GetScriptPoint", "GetEntrancePoint", "GetExitPoint", "GetNeutralEntrancePoint",
    "GetEntrancePointByIndex", "GetEntranceNearToPos", "GetEntranceFarFromPos",
    "GetSidePosition", "GetObjectPosition", "GetPlayerSide", "GetSecondPlayerSide",
    "GetEnemySide", "GetObjectSide", "CreateSide", "GetSideCash", "GetSideSpice", "NewObject",
    "ObjectValid", "ObjectDestroyed", "ObjectNearToSide", "ObjectNearToSideBase",
    "ObjectNearToObject", "ObjectVisibleToSide", "ObjectTypeVisibleToSide", "ObjectGetHealth",
    "ObjectMaxHealth", "SideVisibleToSide", "SideNearToSide", "SideNearToSideBase",
    "SideNearToPoint", "SideUnitCount", "SideBuildingCount", "SideObjectCount", "SideAIDone",
    "EventObjectDelivered", "EventObjectConstructed", "EventObjectTypeConstructed",
    "EventSideAttacksSide", "EventObjectAttacksSide", "EventObjectDestroyed", "Message",
    "GiftingMessage", "TimerMessage", "TimerMessageRemove", "CarryAllDelivery", "Delivery",
    "StarportDelivery", "BuildObject", "ObjectChangeSide", "ObjectSetHealth", "ObjectInfect",
    "ObjectDetonate", "ObjectChange", "ObjectToolTip", "SideFriendTo", "SideEnemyTo",
    "SideNeutralTo", "AddSideCash", "SideAIControl", "SideAIAggressive",
    "SideAIAggressiveTowards", "SideAIBehaviourAggressive", "SideAIBehaviourRetreat",
    "SideAIBehaviourNormal", "SideAIEncounterIgnore", "SideAIEncounterAttack", "SideAIMove",
    "SideAIStop", "SideAIAttackObject", "SideAIGuardObject", "SideAIExitMap",
    "SideAIEnterBuilding", "SideAIBehaviourDefensive", "SideAIHeadlessChicken", "SideAIShuffle",
    "SideAttractsWorms", "SideRepelsWorms", "ForceWormStrike", "MissionOutcome", "EndGameWin",
    "EndGameLose", "NewCrateUnit", "NewCrateBomb", "NewCrateStealth", "NewCrateCash",
    "NewCrateShroud", "SideChangeSide", "SetReinforcements", "SideNuke", "SideNukeAll",
    "RadarEnabled", "RadarAlert", "RemoveShroud", "ReplaceShroud", "RemoveMapShroud",
    "CameraLookAtPoint", "CameraPanToPoint", "CameraScrollToPoint", "CameraZoomTo",
    "CameraViewFrom", "CameraStartRotate", "CameraStopRotate", "CameraTrackObject",
    "CameraStopTrack", "CameraIsPanning", "CameraIsScrolling", "CameraIsSpinning",
    "CameraStore", "CameraRestore", "PIPCameraLookAtPoint", "PIPCameraPanToPoint",
    "PIPCameraScrollToPoint", "PIPCameraZoomTo", "PIPCameraViewFrom", "PIPCameraStartRotate",
    "PIPCameraStopRotate", "PIPCameraTrackObject", "PIPCameraStopTrack", "PIPCameraIsPanning",
    "PIPCameraIsScrolling", "PIPCameraIsSpinning", "PIPCameraStore", "PIPCameraRestore",
    "PIPRelease", "FreezeGame", "UnFreezeGame", "DisableUI", "EnableUI", "ObjectDeploy",
    "ObjectUndeploy", "ObjectSell", "ObjectRemove", "NewObjectInAPC", "ObjectIsCarried",
    "NewObjectOffsetOrientation", "GetNeutralSide", "GetNeutralExitPoint", "PlaySound", "Neg",
    "SetValue", "GetIsolatedEntrance", "GetHideOut", "GetConvoyWayPointFunction", "GetValley",
    "GetIsolatedInfantryRock", "SetSideColor", "GetSideColor", "SetSideCash", "AirStrike",
    "AirStrikeDone", "SetThreatLevel", "SetVeterancy", "FireSpecialWeapon", "SetTilePos",
    "CentreCursor", "BreakPoint", "NormalConditionLose", "int", "obj", "pos", "if", "else",
    "endif", "==", "!=", ">=", "<=", ">", "<", "&&", "||", "FALSE", "TRUE", "+", "-", "=",
];

pub const DEFAULT_STRINGS: [&str; 128] = [
    "ATRefinery", "ATFactory", "ATFactoryFrigate", "ATOutpost", "ATPillbox", "ATRocketTurret",
    "ATHanger", "ATHelipad", "ATStarport", "ATPalace", "ATConYard", "ORSmWindtrap",
    "ORBarracks", "ORWall", "ORRefinery", "ORFactory", "ORFactoryFrigate", "OROutpost",
    "ORGasTurret", "ORPopUpTurret", "ORHanger", "ORStarport", "ORPalace", "ORConYard",
    "TLFleshVat", "GUPalace", "IXResCentre", "IMBarracks", "FRCamp", "HKRefineryDock",
    "ATRefineryDock", "ORRefineryDock", "BeaconFlare", "HKScout", "HKLightInf", "HKTrooper",
    "HKEngineer", "HKFlamer", "ATScout", "ATInfantry", "ATSniper", "ATEngineer", "ATKindjal",
    "ORScout", "ORChemical", "ORAATrooper", "OREngineer", "ORMortar", "ORSaboteur", "IMGeneral",
    "ATGeneral", "HKGeneral", "ORGeneral", "IXScientist", "TLScientist", "IXSlave", "CubScout",
    "ATMilitia", "HKBuzzsaw", "HKAssault", "HKFlame", "HKInkVine", "HKMissile", "HKDevastator",
    "ATTrike", "ATMongoose", "ATAPC", "ATRepairUnit", "ATMinotaurus", "ATSonicTank",
    "ORDustScout", "ORLaserTank", "ORAPC", "ORKobra", "ORDeviator", "HKGunship",
    "HKADVCarryall", "HKDeathHand", "HKADP", "ATOrni", "ATADVCarryall", "ATHawkWeapon", "ATADP",
    "OREITS", "ORADVCarryall", "ORBeamWeapon", "ORADP", "Harvester", "MCV", "Carryall",
    "IXInfiltrator", "IXProjector", "TLContaminator", "TLLeech", "IMSardaukar",
    "IMADVSardaukar", "IMDropShip", "FRFremen", "FRADVFremen", "StoryFRFremen",
    "StoryFRADVFremen", "WormRider", "GUMaker", "GUNIABTank", "INYak", "INYakHauder",
    "INYakRider", "INSandCrawler", "INBuggy", "INMedicalVehicle", "INFemaleCiv", "HKSmWindtrap",
    "HKBarracks", "HKWall", "HKRefinery", "HKFactory", "HKFactoryFrigate", "HKOutpost",
    "HKFlameTurret", "HKGunTurret", "HKHanger", "HKHelipad", "HKStarport", "HKPalace",
    "HKConYard", "ATSmWindtrap", "ATBarracks", "ATWall",
];
